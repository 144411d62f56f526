use actix_web::{web, HttpResponse};
use std::sync::Arc;

use courier_core::services::message::{DownstreamMessageClient, MessageService, PhraseSource};
use courier_shared::types::InternalMessage;

use crate::handlers::error::ApiError;
use crate::middleware::auth::Authenticated;
use crate::middleware::correlation::RequestCorrelation;

/// Application state of the public service
pub struct PublicState<P, D>
where
    P: PhraseSource,
    D: DownstreamMessageClient,
{
    pub message_service: Arc<MessageService<P, D>>,
}

/// Application state of the private service
pub struct PrivateState<P>
where
    P: PhraseSource,
{
    pub phrases: Arc<P>,
}

/// Handler for GET /message on the public service
///
/// Requires at least one authenticated scope. Each scope independently adds
/// its part of the response.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "publicText": "Good morning",
///     "privateText": "Hello World!"
/// }
/// ```
/// Fields the caller's scopes do not cover are omitted.
///
/// ## Errors
/// - 401 when the request is not authenticated
/// - 500 when the private service call fails
pub async fn message<P, D>(
    state: web::Data<PublicState<P, D>>,
    auth: Authenticated,
    correlation: RequestCorrelation,
) -> Result<HttpResponse, ApiError>
where
    P: PhraseSource + 'static,
    D: DownstreamMessageClient + 'static,
{
    tracing::info!("Starting message request");

    let message = state
        .message_service
        .compose(auth.scopes(), correlation.id())
        .await?;

    tracing::info!("Completed message request");

    Ok(HttpResponse::Ok().json(message))
}

/// Handler for GET /message on the private service
///
/// Returns `{"text": "..."}` to any caller authenticated for this service.
pub async fn private_message<P>(
    state: web::Data<PrivateState<P>>,
    _auth: Authenticated,
) -> Result<HttpResponse, ApiError>
where
    P: PhraseSource + 'static,
{
    tracing::info!("Starting message request");

    let result = InternalMessage::new(state.phrases.phrase());

    tracing::info!("Completed message request");

    Ok(HttpResponse::Ok().json(result))
}
