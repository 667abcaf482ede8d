//! Configuration management module
//!
//! This module handles loading and validating application configuration.
//! Configuration is read from `<config dir>/SwipeCard/config.json` when present;
//! the application never writes it.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, GestureSettings, WindowState};
