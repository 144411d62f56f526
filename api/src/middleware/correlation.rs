//! Correlation id middleware.
//!
//! Establishes the request's correlation id before anything else runs:
//! the inbound `X-CorrelationId` header is reused when present and non-empty,
//! otherwise a fresh id is generated. The id is stored in the request
//! extensions, attached to a tracing span that covers the rest of the
//! pipeline, and echoed on the response, including responses rendered from
//! errors raised further in.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use courier_core::domain::value_objects::correlation::{CorrelationId, CORRELATION_ID_HEADER};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use tracing::Instrument;

/// Correlation id middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationMiddleware;

impl CorrelationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorrelationMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorrelationMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelationMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Correlation id middleware service
pub struct CorrelationMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CorrelationMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let span = tracing::info_span!("correlation", correlation_id = tracing::field::Empty);
        let correlation_id =
            span.in_scope(|| CorrelationId::from_inbound(inbound_correlation_id(&req)));
        span.record("correlation_id", tracing::field::display(&correlation_id));

        req.extensions_mut().insert(correlation_id.clone());
        let http_req = req.request().clone();

        Box::pin(
            async move {
                let mut response = match service.call(req).await {
                    Ok(response) => response.map_into_left_body(),
                    Err(error) => ServiceResponse::from_err(error, http_req).map_into_right_body(),
                };

                echo_correlation_id(&mut response, &correlation_id);
                Ok(response)
            }
            .instrument(span),
        )
    }
}

fn echo_correlation_id<B>(response: &mut ServiceResponse<B>, correlation_id: &CorrelationId) {
    match HeaderValue::from_str(correlation_id.as_str()) {
        Ok(value) => {
            response
                .headers_mut()
                .insert(HeaderName::from_static("x-correlationid"), value);
        }
        Err(e) => tracing::warn!(error = %e, "Cannot echo correlation id"),
    }
}

fn inbound_correlation_id(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Extractor for the correlation id of the current request
///
/// `None` only when the correlation middleware is not installed.
#[derive(Debug, Clone)]
pub struct RequestCorrelation(pub Option<CorrelationId>);

impl RequestCorrelation {
    pub fn id(&self) -> Option<&CorrelationId> {
        self.0.as_ref()
    }
}

impl FromRequest for RequestCorrelation {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let correlation_id = req.extensions().get::<CorrelationId>().cloned();
        ready(Ok(RequestCorrelation(correlation_id)))
    }
}
