//! # Error Handling
//!
//! Error types for Kairos store operations.
//!
//! Every kind is recoverable: a failing call never leaves the store
//! partially mutated, so the caller can refresh its view and carry on.

use thiserror::Error;

use crate::types::Timestamp;

/// Result type alias for Kairos operations
pub type Result<T> = std::result::Result<T, Error>;

/// Primary error type for Kairos
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Query Errors
    #[error("Invalid range: start {start} must be less than end {end}")]
    InvalidRange { start: Timestamp, end: Timestamp },

    #[error("Type not found: {event_type}")]
    NotFound { event_type: String },

    // Cursor Errors
    #[error("No current event")]
    NoCurrentElement,

    // System Errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    pub fn not_found(event_type: impl Into<String>) -> Self {
        Error::NotFound {
            event_type: event_type.into(),
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::InvalidRange { .. } => true,
            Error::NotFound { .. } => true,
            Error::NoCurrentElement => true,
            Error::Configuration { .. } => true,
        }
    }

    /// Get error code for monitoring
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidRange { .. } => "INVALID_RANGE",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::NoCurrentElement => "NO_CURRENT_ELEMENT",
            Error::Configuration { .. } => "CONFIG_ERROR",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Configuration {
            message: err.to_string(),
        }
    }
}
