//! Uniform error body shared by every service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned for every failed request
///
/// `message` is always one of [`error_messages`]; fault details stay in the
/// server logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// When the error occurred (ISO-8601)
    pub timestamp: DateTime<Utc>,

    /// Numeric HTTP status
    pub status: u16,

    /// Canonical reason phrase of `status`
    pub error: String,

    /// User-safe message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response stamped with the current time
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status,
            error: error.into(),
            message: message.into(),
        }
    }
}

/// User-safe messages placed in [`ErrorResponse::message`]
pub mod error_messages {
    pub const UNAUTHORIZED: &str = "Authentication is required";
    pub const NOT_FOUND: &str = "Oops, we can't seem to find what you are looking for";
    pub const METHOD_NOT_ALLOWED: &str = "Sorry, that method is not supported for this resource";
    pub const INTERNAL_ERROR: &str = "Sorry about that, something went wrong on our end";
}
