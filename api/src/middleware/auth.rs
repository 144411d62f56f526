//! Token authentication gate for the message endpoints.
//!
//! The gate turns an `Authorization: Bearer <token>` header into the set of
//! scopes the request is authenticated with and publishes it in the request
//! extensions. It never rejects a request: a missing, malformed, expired or
//! otherwise invalid token simply yields an empty scope set, and endpoints
//! that need scopes reject through the [`Authenticated`] extractor.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use courier_core::domain::value_objects::scope::ScopeSet;
use courier_core::services::token::TokenVerifier;
use courier_shared::config::AuthConfig;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::ApiError;

/// Scopes the current request was authenticated with; empty when no valid
/// token was presented
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticatedScopes(pub ScopeSet);

/// Marks a request the gate has already processed
#[derive(Debug, Clone, Copy)]
struct GateApplied;

/// Token authentication middleware factory
#[derive(Clone)]
pub struct TokenAuth {
    verifier: Arc<TokenVerifier>,
}

impl TokenAuth {
    /// Creates the gate for `config`'s key and supported scopes
    pub fn new(config: &AuthConfig) -> Self {
        let supported: ScopeSet = config.supported_scopes.iter().cloned().collect();

        tracing::info!(
            key = %config.obfuscated_key(),
            supported_scopes = %supported,
            "Token authentication configured"
        );

        Self {
            verifier: Arc::new(TokenVerifier::new(&config.token_key, supported)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// Token authentication middleware service
pub struct TokenAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<TokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let already_applied = req.extensions().get::<GateApplied>().is_some();
            if !already_applied {
                authenticate(&req, &verifier);
            }

            service.call(req).await
        })
    }
}

fn authenticate(req: &ServiceRequest, verifier: &TokenVerifier) {
    {
        let mut extensions = req.extensions_mut();
        extensions.remove::<AuthenticatedScopes>();
        extensions.insert(GateApplied);
    }

    let scopes = match extract_bearer_token(req) {
        None => {
            tracing::debug!(path = %req.path(), "No bearer token presented");
            ScopeSet::empty()
        }
        Some(token) => match verifier.verify(&token) {
            Ok(scopes) => {
                tracing::debug!(scopes = %scopes, "Request authenticated");
                scopes
            }
            // Rejection detail is logged by the verifier
            Err(_) => ScopeSet::empty(),
        },
    };

    req.extensions_mut().insert(AuthenticatedScopes(scopes));
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for optional authentication; never fails
impl FromRequest for AuthenticatedScopes {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let scopes = req
            .extensions()
            .get::<AuthenticatedScopes>()
            .cloned()
            .unwrap_or_default();
        ready(Ok(scopes))
    }
}

/// Extractor for required authentication
///
/// Rejects with 401 when the request carries no authenticated scopes.
#[derive(Debug, Clone)]
pub struct Authenticated(pub ScopeSet);

impl Authenticated {
    pub fn scopes(&self) -> &ScopeSet {
        &self.0
    }
}

impl FromRequest for Authenticated {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = match req.extensions().get::<AuthenticatedScopes>() {
            Some(AuthenticatedScopes(scopes)) if !scopes.is_empty() => {
                Ok(Authenticated(scopes.clone()))
            }
            _ => Err(ApiError::Unauthorized),
        };
        ready(result)
    }
}
