//! Correlation id value object

use std::fmt;

use uuid::Uuid;

/// Header carrying the correlation id between services
pub const CORRELATION_ID_HEADER: &str = "X-CorrelationId";

/// Request-scoped id used to stitch together logs across service hops
///
/// Created once per inbound request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Wraps an existing id; `None` when the value is empty
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// A fresh random (UUID v4) id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Takes the inbound header value when present and non-empty, otherwise
    /// generates a new id
    pub fn from_inbound(header: Option<&str>) -> Self {
        match header.and_then(|value| Self::new(value)) {
            Some(id) => id,
            None => {
                let id = Self::generate();
                tracing::warn!(
                    correlation_id = %id,
                    "No {} header on inbound request, generated a new id",
                    CORRELATION_ID_HEADER
                );
                id
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_value_is_kept() {
        let id = CorrelationId::from_inbound(Some("abc-123"));
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_missing_or_empty_inbound_generates() {
        let first = CorrelationId::from_inbound(None);
        let second = CorrelationId::from_inbound(Some(""));

        assert!(!first.as_str().is_empty());
        assert!(Uuid::parse_str(first.as_str()).is_ok());
        assert_ne!(first, second);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(CorrelationId::new("").is_none());
        assert_eq!(CorrelationId::new("x").unwrap().to_string(), "x");
    }
}
