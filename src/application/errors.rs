//! Application layer error types

use thiserror::Error;

/// Application layer errors
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] crate::client::ClientError),

    #[error("Photo error: {0}")]
    Photo(#[from] crate::wizard::PhotoError),

    #[error(transparent)]
    Core(#[from] crate::core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The session was reset while the request was in flight and the
    /// reply was discarded
    #[error("The request was cancelled by a reset")]
    Cancelled,
}

/// Validation errors for requests
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error(
        "Content is {length} characters; expected between {min} and {max}"
    )]
    ContentOutOfBounds {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Cannot combine --style with --random-style")]
    ConflictingStyleChoice,
}
