//! Service token claims

use serde::{Deserialize, Serialize};

/// Claims carried by a service token
///
/// Tokens are never persisted; these claims only exist inside the signed
/// compact string. Both timestamps are optional on the wire so that tokens
/// lacking either one can be decoded and then rejected by policy rather than
/// by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Issued at (NumericDate, seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (NumericDate, seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Scopes granted to the bearer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

impl TokenClaims {
    /// Issued-at in milliseconds since epoch
    pub fn issued_at_millis(&self) -> Option<i64> {
        self.iat.map(|secs| secs.saturating_mul(1000))
    }

    /// Expiration in milliseconds since epoch
    pub fn expires_at_millis(&self) -> Option<i64> {
        self.exp.map(|secs| secs.saturating_mul(1000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_claims_are_not_serialized() {
        let claims = TokenClaims {
            iat: None,
            exp: Some(1_700_000_000),
            scopes: Some(vec!["PUBLIC_SERVICE".to_string()]),
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("iat").is_none());
        assert_eq!(json["exp"], 1_700_000_000);
        assert_eq!(claims.expires_at_millis(), Some(1_700_000_000_000));
        assert_eq!(claims.issued_at_millis(), None);
    }

    #[test]
    fn test_missing_claims_deserialize_as_none() {
        let claims: TokenClaims = serde_json::from_str("{}").unwrap();
        assert_eq!(claims, TokenClaims::default());
    }
}
