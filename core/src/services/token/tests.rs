//! Unit tests for the token codec

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::value_objects::scope::{ScopeSet, PRIVATE_SERVICE, PUBLIC_SERVICE};
use crate::errors::TokenError;
use crate::services::token::{issue, issue_with_lifetime, verify, verify_at, TokenVerifier};

const KEY: &str = "test-signing-key-0123456789";

fn whitelist() -> ScopeSet {
    [PUBLIC_SERVICE, PRIVATE_SERVICE].into_iter().collect()
}

/// Whole-second instant so that second-resolution claims compare exactly
fn fixed_now() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

#[test]
fn test_round_trip_returns_scopes() {
    let now = fixed_now();
    let token = issue(
        KEY,
        Some(now - Duration::seconds(1)),
        Some(now + Duration::seconds(10)),
        [PUBLIC_SERVICE],
    )
    .unwrap();

    let scopes = verify_at(KEY, &whitelist(), &token, now).unwrap();
    let expected: ScopeSet = [PUBLIC_SERVICE].into_iter().collect();
    assert_eq!(scopes, expected);
}

#[test]
fn test_issue_with_lifetime_is_valid_now() {
    let token = issue_with_lifetime(KEY, 10_000, [PUBLIC_SERVICE, PRIVATE_SERVICE]).unwrap();

    let scopes = verify(KEY, &whitelist(), &token).unwrap();
    assert!(scopes.contains(PUBLIC_SERVICE));
    assert!(scopes.contains(PRIVATE_SERVICE));
}

#[test]
fn test_wrong_key_is_rejected() {
    let token = issue_with_lifetime(KEY, 10_000, [PUBLIC_SERVICE]).unwrap();

    let result = verify("another-key-entirely", &whitelist(), &token);
    assert_eq!(result, Err(TokenError::InvalidSignature));
}

#[test]
fn test_expiry_boundary_is_exclusive() {
    let now = fixed_now();
    let token = issue(KEY, Some(now - Duration::seconds(5)), Some(now), [PUBLIC_SERVICE]).unwrap();

    let result = verify_at(KEY, &whitelist(), &token, now);
    assert!(matches!(result, Err(TokenError::InvalidTimestamps { .. })));

    // One millisecond earlier it is still valid
    let earlier = now - Duration::milliseconds(1);
    assert!(verify_at(KEY, &whitelist(), &token, earlier).is_ok());
}

#[test]
fn test_issued_at_boundary_is_inclusive() {
    let now = fixed_now();
    let token = issue(KEY, Some(now), Some(now + Duration::seconds(10)), [PUBLIC_SERVICE]).unwrap();

    assert!(verify_at(KEY, &whitelist(), &token, now).is_ok());

    let before = now - Duration::milliseconds(1);
    assert!(matches!(
        verify_at(KEY, &whitelist(), &token, before),
        Err(TokenError::InvalidTimestamps { .. })
    ));
}

#[test]
fn test_unsupported_scope_rejects_whole_token() {
    let whitelist: ScopeSet = ["A", "B"].into_iter().collect();
    let token = issue_with_lifetime(KEY, 10_000, ["A", "C"]).unwrap();

    let result = verify(KEY, &whitelist, &token);
    match result {
        Err(TokenError::InvalidScopes { scopes }) => {
            assert_eq!(scopes, vec!["A".to_string(), "C".to_string()]);
        }
        other => panic!("expected InvalidScopes, got {:?}", other),
    }
}

#[test]
fn test_missing_issued_at_is_rejected() {
    let now = fixed_now();
    let token = issue(KEY, None, Some(now + Duration::seconds(10)), [PUBLIC_SERVICE]).unwrap();

    let result = verify_at(KEY, &whitelist(), &token, now);
    assert_eq!(
        result,
        Err(TokenError::InvalidTimestamps {
            iat: None,
            exp: Some(now.timestamp() + 10),
        })
    );
}

#[test]
fn test_missing_expiry_is_rejected() {
    let now = fixed_now();
    let token = issue(KEY, Some(now), None, [PUBLIC_SERVICE]).unwrap();

    let result = verify_at(KEY, &whitelist(), &token, now);
    assert!(matches!(
        result,
        Err(TokenError::InvalidTimestamps { exp: None, .. })
    ));
}

#[test]
fn test_empty_scopes_are_rejected() {
    let token = issue_with_lifetime(KEY, 10_000, Vec::<String>::new()).unwrap();

    let result = verify(KEY, &whitelist(), &token);
    assert_eq!(result, Err(TokenError::InvalidScopes { scopes: vec![] }));
}

#[test]
fn test_timestamp_failure_wins_over_scope_failure() {
    let now = fixed_now();
    let token = issue(KEY, Some(now), None, ["UNKNOWN"]).unwrap();

    let error = verify_at(KEY, &whitelist(), &token, now).unwrap_err();
    assert!(error.is_policy_violation());
    assert!(matches!(error, TokenError::InvalidTimestamps { .. }));
}

#[test]
fn test_malformed_token_is_rejected() {
    for token in ["", "not-a-token", "a.b.c"] {
        let result = verify(KEY, &whitelist(), token);
        assert!(
            matches!(result, Err(TokenError::Malformed { .. })),
            "token {:?} gave {:?}",
            token,
            result
        );
    }
}

#[test]
fn test_issue_deduplicates_scopes_in_order() {
    let now = fixed_now();
    let token = issue(
        KEY,
        Some(now),
        Some(now + Duration::seconds(10)),
        [PRIVATE_SERVICE, PUBLIC_SERVICE, PRIVATE_SERVICE],
    )
    .unwrap();

    // A whitelist that rejects everything reports the claim as issued
    let whitelist: ScopeSet = ["only-this"].into_iter().collect();
    match verify_at(KEY, &whitelist, &token, now) {
        Err(TokenError::InvalidScopes { scopes }) => {
            assert_eq!(scopes, vec![PRIVATE_SERVICE.to_string(), PUBLIC_SERVICE.to_string()]);
        }
        other => panic!("expected InvalidScopes, got {:?}", other),
    }
}

#[test]
fn test_verifier_matches_free_function() {
    let now = fixed_now();
    let verifier = TokenVerifier::new(KEY, whitelist());
    let token = issue(KEY, Some(now), Some(now + Duration::seconds(1)), [PRIVATE_SERVICE]).unwrap();

    assert_eq!(
        verifier.verify_at(&token, now),
        verify_at(KEY, &whitelist(), &token, now)
    );
    assert_eq!(verifier.supported_scopes(), &whitelist());
    assert!(verifier.verify_at(&token, now + Duration::seconds(1)).is_err());
}

#[test]
fn test_overflowing_lifetime_fails_instead_of_panicking() {
    for lifetime_ms in [i64::MAX / 2, i64::MAX, i64::MIN] {
        let result = issue_with_lifetime(KEY, lifetime_ms, [PUBLIC_SERVICE]);
        assert_eq!(result, Err(TokenError::GenerationFailed), "lifetime {}", lifetime_ms);
    }
}
