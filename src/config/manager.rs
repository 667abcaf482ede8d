//! Configuration manager for loading application configuration
//!
//! Configuration lives in `<config dir>/SwipeCard/config.json`. The file is
//! optional and only ever read: a missing file means defaults, a file that
//! fails to parse is logged and replaced by defaults, and a file that parses
//! but describes an unusable setup is an error.

use crate::config::models::AppConfig;
use crate::error::{Result, StringError, SwipeCardError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the base configuration directory
pub const CONFIG_HOME_ENV: &str = "SWIPECARD_HOME";

/// Application directory name under the base configuration directory
const APP_DIR_NAME: &str = "SwipeCard";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the application's configuration directory
    ///
    /// Resolution order: `$SWIPECARD_HOME`, `%APPDATA%`, `$XDG_CONFIG_HOME`,
    /// `$HOME/.config`, then the working directory.
    pub fn get_config_dir() -> PathBuf {
        let base = std::env::var_os(CONFIG_HOME_ENV)
            .or_else(|| std::env::var_os("APPDATA"))
            .or_else(|| std::env::var_os("XDG_CONFIG_HOME"))
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join(APP_DIR_NAME)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.json")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<AppConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `path`
    ///
    /// If the file doesn't exist or is corrupt, returns default configuration.
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            info!("Configuration file not found at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        let config: AppConfig = match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                return Ok(AppConfig::default());
            }
        };

        Self::validate(&config)?;
        info!(
            "Configuration loaded successfully ({} subjects)",
            config.subjects.len()
        );
        Ok(config)
    }

    /// Check invariants that serde cannot express
    pub fn validate(config: &AppConfig) -> Result<()> {
        if config.subjects.is_empty() {
            return Err(SwipeCardError::EmptySubjectList);
        }
        if config.window.width == 0 || config.window.height == 0 {
            return Err(SwipeCardError::ConfigError(StringError::new(format!(
                "window size must be non-zero, got {}x{}",
                config.window.width, config.window.height
            ))));
        }
        config.gesture.validate()
    }
}
