//! Uniform error responses.
//!
//! Every failure leaving a service is rendered as the same
//! `{timestamp, status, error, message}` body. `message` is always one of the
//! fixed user-safe strings; the underlying fault is logged, never returned.

use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use courier_core::errors::DomainError;
use courier_shared::errors::{error_messages, ErrorResponse};
use thiserror::Error;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint requires scopes and the request has none
    #[error("Authentication is required")]
    Unauthorized,

    /// No route matched
    #[error("No route for {path}")]
    NotFound { path: String },

    /// The path exists but not for this method
    #[error("{method} is not supported on {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let message = match status {
            StatusCode::UNAUTHORIZED => error_messages::UNAUTHORIZED,
            StatusCode::NOT_FOUND => error_messages::NOT_FOUND,
            StatusCode::METHOD_NOT_ALLOWED => error_messages::METHOD_NOT_ALLOWED,
            _ => error_messages::INTERNAL_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::info!(status = status.as_u16(), error = %self, "Request rejected");
        }

        HttpResponse::build(status).json(ErrorResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            message,
        ))
    }
}

/// Default service for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound {
        path: req.path().to_string(),
    })
}

/// Default service of resources hit with an unsupported method
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}
