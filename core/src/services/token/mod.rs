//! Token codec for service-to-service authentication
//!
//! Tokens are compact HS256 JWS strings carrying `iat`, `exp` and `scopes`.
//! Verification runs in two phases:
//! - structure and signature, which short-circuit on failure
//! - time window and scope whitelist, checked independently of each other

mod codec;

#[cfg(test)]
mod tests;

pub use codec::{issue, issue_with_lifetime, verify, verify_at, TokenVerifier};
