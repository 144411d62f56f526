//! Issue and verify signed, time-boxed, scoped tokens

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::TokenClaims;
use crate::domain::value_objects::scope::ScopeSet;
use crate::errors::TokenError;

/// Issues a token signed with `signing_key`
///
/// Scopes are deduplicated keeping the first occurrence order. A missing
/// `issued_at` or `expires_at` omits the matching claim, which yields a token
/// every verifier rejects.
pub fn issue<I, S>(
    signing_key: &str,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
    scopes: I,
) -> Result<String, TokenError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut unique: Vec<String> = Vec::new();
    for scope in scopes {
        let scope = scope.into();
        if !unique.contains(&scope) {
            unique.push(scope);
        }
    }

    let claims = TokenClaims {
        iat: issued_at.map(|at| at.timestamp()),
        exp: expires_at.map(|at| at.timestamp()),
        scopes: Some(unique),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to sign token");
        TokenError::GenerationFailed
    })
}

/// Issues a token valid from now for `lifetime_ms` milliseconds
pub fn issue_with_lifetime<I, S>(
    signing_key: &str,
    lifetime_ms: i64,
    scopes: I,
) -> Result<String, TokenError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let now = Utc::now();
    let expires_at = Duration::try_milliseconds(lifetime_ms)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            tracing::error!(lifetime_ms, "Token lifetime out of range");
            TokenError::GenerationFailed
        })?;

    issue(signing_key, Some(now), Some(expires_at), scopes)
}

/// Verifies `token` against `verification_key` and `supported_scopes` at the
/// current time, returning the token's scopes when valid
pub fn verify(
    verification_key: &str,
    supported_scopes: &ScopeSet,
    token: &str,
) -> Result<ScopeSet, TokenError> {
    verify_at(verification_key, supported_scopes, token, Utc::now())
}

/// Same as [`verify`] with an explicit notion of "now"
pub fn verify_at(
    verification_key: &str,
    supported_scopes: &ScopeSet,
    token: &str,
    now: DateTime<Utc>,
) -> Result<ScopeSet, TokenError> {
    let decoding_key = DecodingKey::from_secret(verification_key.as_bytes());
    check(&decoding_key, supported_scopes, token, now)
}

/// Verifier bound to one key and one whitelist
///
/// Built once at startup and shared read-only between requests.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    supported_scopes: ScopeSet,
}

impl TokenVerifier {
    pub fn new(verification_key: &str, supported_scopes: ScopeSet) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(verification_key.as_bytes()),
            supported_scopes,
        }
    }

    pub fn supported_scopes(&self) -> &ScopeSet {
        &self.supported_scopes
    }

    pub fn verify(&self, token: &str) -> Result<ScopeSet, TokenError> {
        check(&self.decoding_key, &self.supported_scopes, token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<ScopeSet, TokenError> {
        check(&self.decoding_key, &self.supported_scopes, token, now)
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("supported_scopes", &self.supported_scopes)
            .finish_non_exhaustive()
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // Time window and scopes are checked below at millisecond resolution
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.required_spec_claims.clear();
    validation
}

fn check(
    decoding_key: &DecodingKey,
    supported_scopes: &ScopeSet,
    token: &str,
    now: DateTime<Utc>,
) -> Result<ScopeSet, TokenError> {
    let claims = decode::<TokenClaims>(token, decoding_key, &validation())
        .map(|data| data.claims)
        .map_err(|e| {
            let error = match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed {
                    reason: e.to_string(),
                },
            };
            tracing::warn!(error = %error, "Token failed structural verification");
            error
        })?;

    let timestamps = check_timestamps(&claims, now.timestamp_millis());
    if let Err(error) = &timestamps {
        tracing::warn!(error = %error, now_ms = now.timestamp_millis(), "Token rejected");
    }

    let scopes = check_scopes(&claims, supported_scopes);
    if let Err(error) = &scopes {
        tracing::warn!(
            error = %error,
            supported = %supported_scopes,
            "Token rejected"
        );
    }

    timestamps?;
    scopes
}

fn check_timestamps(claims: &TokenClaims, now_ms: i64) -> Result<(), TokenError> {
    match (claims.issued_at_millis(), claims.expires_at_millis()) {
        (Some(issued_at), Some(expires_at)) if issued_at <= now_ms && now_ms < expires_at => Ok(()),
        _ => Err(TokenError::InvalidTimestamps {
            iat: claims.iat,
            exp: claims.exp,
        }),
    }
}

fn check_scopes(claims: &TokenClaims, supported_scopes: &ScopeSet) -> Result<ScopeSet, TokenError> {
    let scopes = claims.scopes.as_deref().unwrap_or_default();
    if scopes.is_empty() || !supported_scopes.covers(scopes) {
        return Err(TokenError::InvalidScopes {
            scopes: scopes.to_vec(),
        });
    }
    Ok(scopes.iter().cloned().collect())
}
