//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while running pomo.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed data (log rows, JSON, YAML).
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for PomoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for PomoError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
