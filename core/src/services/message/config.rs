//! Downstream token minting configuration

use courier_shared::config::DownstreamConfig;

use crate::domain::value_objects::scope::PRIVATE_SERVICE;

/// How tokens for the private service are minted
#[derive(Debug, Clone)]
pub struct DownstreamTokenConfig {
    /// Key shared with the private service, never the caller's key
    pub signing_key: String,

    /// Lifetime of each minted token in milliseconds
    pub lifetime_ms: i64,

    /// The only scope the minted token carries
    pub scope: String,
}

impl DownstreamTokenConfig {
    pub fn new(signing_key: impl Into<String>, lifetime_ms: i64) -> Self {
        Self {
            signing_key: signing_key.into(),
            lifetime_ms,
            scope: PRIVATE_SERVICE.to_string(),
        }
    }
}

impl From<&DownstreamConfig> for DownstreamTokenConfig {
    fn from(config: &DownstreamConfig) -> Self {
        Self::new(config.token_key.clone(), config.token_lifetime_ms)
    }
}
