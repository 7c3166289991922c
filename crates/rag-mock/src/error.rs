//! Error types for the mock providers

use thiserror::Error;

/// Result type alias for mock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Mock provider errors
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied a value outside the accepted domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input was not valid JSON or did not match the request shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file was not valid TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the caller's input caused this error, as opposed to the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::Json(_))
    }
}
