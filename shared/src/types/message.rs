//! Message payloads

use serde::{Deserialize, Serialize};

/// Response of the public service; each field is present only when the
/// caller's scopes allowed it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_text: Option<String>,
}

impl ExternalMessage {
    /// True when no field was populated
    pub fn is_empty(&self) -> bool {
        self.public_text.is_none() && self.private_text.is_none()
    }
}

/// Response of the private service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalMessage {
    pub text: String,
}

impl InternalMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
