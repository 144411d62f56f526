//! # Courier Core
//!
//! Domain layer of the Courier services: the signed service-token codec, the
//! scope set and correlation id value objects, the scope-gated message
//! orchestrator with its collaborator traits, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CorrelationId, ScopeSet, TokenClaims, CORRELATION_ID_HEADER, PRIVATE_SERVICE, PUBLIC_SERVICE,
};
pub use errors::{DomainError, DomainResult, TokenError};
pub use services::{
    DownstreamMessageClient, DownstreamTokenConfig, MessageService, PhraseSource, TokenVerifier,
};
