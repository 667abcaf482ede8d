//! Logging setup
//!
//! Each run writes to `swipecard.log` in the config directory. Older runs are
//! shifted to `swipecard.log.1` (most recent) up to `swipecard.log.9` before
//! the subscriber is installed, so every file holds exactly one session.

use crate::config::ConfigManager;
use crate::error::{Result, StringError, SwipeCardError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Current session log
const LOG_FILE_NAME: &str = "swipecard.log";

/// Number of previous sessions kept next to the current one
const KEPT_SESSIONS: u8 = 9;

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the lifetime of the program.
pub fn init_logging() -> Result<WorkerGuard> {
    let log_dir = ConfigManager::get_config_dir();
    fs::create_dir_all(&log_dir)?;
    shift_session_logs(&log_dir.join(LOG_FILE_NAME), KEPT_SESSIONS)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&log_dir)
        .map_err(|e| SwipeCardError::ConfigError(Box::new(e)))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SwipeCardError::ConfigError(Box::new(e)))?;

    tracing::debug!("Logging to {}", log_dir.join(LOG_FILE_NAME).display());
    Ok(guard)
}

/// Path of the `generation`-th previous session log (`<log>.N`)
fn generation_path(log_path: &Path, generation: u8) -> Result<PathBuf> {
    let name = log_path
        .file_name()
        .ok_or_else(|| SwipeCardError::ConfigError(StringError::new("Log path has no file name")))?;

    let mut rotated = name.to_os_string();
    rotated.push(format!(".{generation}"));
    Ok(log_path.with_file_name(rotated))
}

/// Move `log` to `log.1`, `log.1` to `log.2` and so on, dropping `log.<keep>`
///
/// Does nothing if there is no current log.
fn shift_session_logs(log_path: &Path, keep: u8) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let oldest = generation_path(log_path, keep)?;
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }

    for generation in (1..keep).rev() {
        let from = generation_path(log_path, generation)?;
        if from.exists() {
            fs::rename(&from, generation_path(log_path, generation + 1)?)?;
        }
    }

    fs::rename(log_path, generation_path(log_path, 1)?)?;
    Ok(())
}
