//! Token error types

use thiserror::Error;

/// Why a token was not accepted, or could not be produced.
///
/// Callers only ever see "invalid"; the variants exist for server-side logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token could not be parsed: {reason}")]
    Malformed { reason: String },

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token timestamps missing or out of range: iat={iat:?}, exp={exp:?}")]
    InvalidTimestamps { iat: Option<i64>, exp: Option<i64> },

    #[error("Token scopes missing or unsupported: {scopes:?}")]
    InvalidScopes { scopes: Vec<String> },

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// The token was authentic but failed the time window or scope policy
    pub fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            TokenError::InvalidTimestamps { .. } | TokenError::InvalidScopes { .. }
        )
    }
}
