//! Outbound HTTP and downstream service configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings shared by every outbound HTTP client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpClientConfig {
    /// Connect and request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl HttpClientConfig {
    /// Timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Downstream (private) service the orchestrator fans out to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownstreamConfig {
    /// Full URI of the downstream message resource
    #[serde(default = "default_message_uri")]
    pub message_uri: String,

    /// HS256 key used to sign tokens for the downstream trust boundary
    pub token_key: String,

    /// Lifetime of each minted downstream token in milliseconds
    #[serde(default = "default_token_lifetime_ms")]
    pub token_lifetime_ms: i64,
}

impl DownstreamConfig {
    /// Create a downstream configuration with default URI and token lifetime
    pub fn new(token_key: impl Into<String>) -> Self {
        Self {
            message_uri: default_message_uri(),
            token_key: token_key.into(),
            token_lifetime_ms: default_token_lifetime_ms(),
        }
    }

    /// Point the configuration at a different message URI
    pub fn with_message_uri(mut self, uri: impl Into<String>) -> Self {
        self.message_uri = uri.into();
        self
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

pub(crate) fn default_message_uri() -> String {
    String::from("http://localhost:8082/message")
}

/// Upper bound for `token_lifetime_ms` (one hour)
pub const MAX_TOKEN_LIFETIME_MS: i64 = 3_600_000;

fn default_token_lifetime_ms() -> i64 {
    10_000
}
