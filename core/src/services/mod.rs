//! Business services: the token codec and the scope-gated message orchestrator.

pub mod message;
pub mod token;

// Re-export commonly used types
pub use message::{DownstreamMessageClient, DownstreamTokenConfig, MessageService, PhraseSource};
pub use token::{issue, issue_with_lifetime, verify, verify_at, TokenVerifier};
