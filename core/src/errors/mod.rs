//! Domain-specific error types and error handling.

mod types;

pub use types::TokenError;

use thiserror::Error;

/// Failures raised while composing a message
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Downstream service failure: {message}")]
    Downstream { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
