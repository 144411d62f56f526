//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the message orchestrator
//! depends on:
//! - **HTTP**: reqwest client for the private service, with outbound
//!   correlation id propagation
//! - **Phrases**: random phrase source for the public text

/// HTTP clients for downstream services
pub mod http;

/// Local phrase source
pub mod phrases;

pub use http::{propagate_correlation, PrivateServiceClient};
pub use phrases::RandomPhraseSource;

use courier_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error, including timeouts and non-success statuses
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Downstream {
            message: error.to_string(),
        }
    }
}
