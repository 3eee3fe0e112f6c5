use thiserror::Error;

/// Error taxonomy for the hackhub API. Each variant is a distinct failure
/// kind so callers dispatch on structure, never on message contents.
#[derive(Error, Debug)]
pub enum HackError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Booking quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type HackResult<T> = Result<T, HackError>;
