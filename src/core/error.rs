//! Error handling for the WebWizard client library.
//!
//! This module defines the main error type `Error` used throughout the
//! library, along with a convenient `Result` type alias. It uses `thiserror`
//! for easy error handling and implements conversions from common error
//! types.

use thiserror::Error;

/// Result type for WebWizard client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for WebWizard client operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings file parsing error
    #[error("Settings file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Client-side request error
    #[error("Client error: {0}")]
    Client(#[from] crate::client::ClientError),

    /// Profile photo error
    #[error("Photo error: {0}")]
    Photo(#[from] crate::wizard::PhotoError),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
