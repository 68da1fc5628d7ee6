//! Error types for the token importer.
//!
//! Parsing and categorization never fail: unparseable values are skipped.
//! These errors only cover reading input from disk and decoding JSON or
//! configuration text.

use std::path::PathBuf;

/// Result type alias for importer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading token sources or options.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read token source '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON token source could not be decoded.
    #[error("Invalid JSON token source: {0}")]
    Json(#[from] serde_json::Error),

    /// Import options could not be decoded.
    #[error("Invalid import options: {0}")]
    Config(#[from] toml::de::Error),

    /// An option was decoded but holds an unusable value.
    #[error("Invalid value for option '{option}': {message}")]
    InvalidOption { option: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an option error.
    pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }
}
