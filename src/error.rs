//! Error types for bhitti-nav.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, FollowerError>;

/// Controller error type
#[derive(Debug, Error)]
pub enum FollowerError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport error (sensor feed or command sink)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Scan does not match the expected beam layout
    #[error("Invalid scan: expected {expected} beams, got {actual}")]
    InvalidScan {
        /// Expected beam count
        expected: usize,
        /// Actual beam count
        actual: usize,
    },
}

impl From<basic_toml::Error> for FollowerError {
    fn from(e: basic_toml::Error) -> Self {
        FollowerError::Config(e.to_string())
    }
}
