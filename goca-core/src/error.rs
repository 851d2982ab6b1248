//! Error types for goca.

use thiserror::Error;

/// Errors that can occur while resolving availability or submitting a booking.
#[derive(Error, Debug)]
pub enum GocaError {
    #[error("Invalid availability model: {0}")]
    InvalidModel(String),

    #[error("Invalid event duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Event type not found: {0}")]
    EventTypeNotFound(i64),

    #[error("Booking submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for goca operations.
pub type GocaResult<T> = Result<T, GocaError>;
