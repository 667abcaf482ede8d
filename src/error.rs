//! Error types for `SwipeCard`
//!
//! This module defines all error types used throughout the crate,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `SwipeCard`
#[derive(Debug, Error)]
pub enum SwipeCardError {
    /// The subject list was empty; a card needs at least one subject to show
    #[error("Subject list must not be empty")]
    EmptySubjectList,

    /// A subject name could not be resolved to a display color
    #[error("Unknown subject color: {0}")]
    UnknownColor(String),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for `SwipeCard` operations
pub type Result<T> = std::result::Result<T, SwipeCardError>;

/// Convert an error to a user-friendly message
///
/// Returns a message suitable for an error dialog or stderr, with a hint
/// pointing at the configuration file where that helps.
pub fn get_user_friendly_error(error: &SwipeCardError) -> String {
    match error {
        SwipeCardError::EmptySubjectList => "No cards to show.\n\n\
             The \"subjects\" list in config.json is empty.\n\
             Add at least one color name, or delete the file to use the defaults."
            .to_string(),
        SwipeCardError::UnknownColor(name) => {
            format!(
                "Unknown card color: {name}\n\n\
                 Use a CSS color name (e.g. \"purple\") or a hex value (e.g. \"#ff8800\")."
            )
        }
        SwipeCardError::ConfigError(e) => {
            format!(
                "Invalid configuration:\n\n{e}\n\n\
                 Fix the value in config.json or delete the file to use the defaults."
            )
        }
        SwipeCardError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SwipeCardError::EmptySubjectList;
        assert_eq!(error.to_string(), "Subject list must not be empty");
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = SwipeCardError::EmptySubjectList;
        let message = get_user_friendly_error(&error);
        assert!(message.contains("No cards to show"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: SwipeCardError = io_error.into();
        assert!(matches!(error, SwipeCardError::IoError(_)));
    }

    #[test]
    fn test_unknown_color_display() {
        let error = SwipeCardError::UnknownColor("blurple".to_string());
        assert_eq!(error.to_string(), "Unknown subject color: blurple");

        let message = get_user_friendly_error(&error);
        assert!(message.contains("blurple"));
        assert!(message.contains("hex value"));
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as _;

        let error = SwipeCardError::ConfigError(StringError::new("swipe_threshold must be > 0"));
        assert_eq!(
            error.to_string(),
            "Configuration error: swipe_threshold must be > 0"
        );
        assert!(error.source().is_some());
    }
}
