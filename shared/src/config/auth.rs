//! Authentication configuration

use serde::{Deserialize, Deserializer, Serialize};

/// Number of key characters that may appear in diagnostic logs
const KEY_DIAGNOSTIC_PREFIX: usize = 6;

/// Token verification configuration for an inbound trust boundary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Shared HS256 key used to verify inbound bearer tokens
    pub token_key: String,

    /// Scopes this service accepts; a token carrying any other scope is rejected
    #[serde(deserialize_with = "deserialize_scope_list")]
    pub supported_scopes: Vec<String>,
}

impl AuthConfig {
    /// Create a new authentication configuration
    pub fn new<I, S>(token_key: impl Into<String>, supported_scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            token_key: token_key.into(),
            supported_scopes: supported_scopes.into_iter().map(Into::into).collect(),
        }
    }

    /// Key rendering that is safe to log
    pub fn obfuscated_key(&self) -> String {
        obfuscate_key(&self.token_key)
    }
}

/// Keeps the first few characters of a key and hides the rest.
///
/// Keys no longer than the visible prefix are returned unchanged; secure keys
/// are always longer than that.
pub fn obfuscate_key(key: &str) -> String {
    if key.chars().count() > KEY_DIAGNOSTIC_PREFIX {
        let prefix: String = key.chars().take(KEY_DIAGNOSTIC_PREFIX).collect();
        format!("{}...", prefix)
    } else {
        key.to_string()
    }
}

/// Accepts either a list of scopes or a single comma separated string
/// (the form environment variables arrive in).
pub(crate) fn deserialize_scope_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScopeList {
        List(Vec<String>),
        Csv(String),
    }

    let scopes = match ScopeList::deserialize(deserializer)? {
        ScopeList::List(list) => list,
        ScopeList::Csv(csv) => csv.split(',').map(str::to_string).collect(),
    };

    Ok(scopes
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}
