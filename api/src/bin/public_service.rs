//! Public service: scope-gated message fan-out to the private service

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::{anyhow, Context};
use tracing::info;

use courier_api::{
    create_public_app, middleware::auth::TokenAuth, routes::PublicState, telemetry,
};
use courier_core::services::message::{DownstreamTokenConfig, MessageService};
use courier_infra::{PrivateServiceClient, RandomPhraseSource};
use courier_shared::config::{auth::obfuscate_key, AppConfig, ServiceProfile};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let profile = ServiceProfile::PUBLIC;
    let config = AppConfig::load(&profile)
        .with_context(|| format!("failed to load {} configuration", profile.name))?;

    telemetry::init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting {}", profile.name);

    let downstream = config
        .downstream
        .as_ref()
        .ok_or_else(|| anyhow!("{} requires a [downstream] section", profile.name))?;

    info!(
        uri = %downstream.message_uri,
        key = %obfuscate_key(&downstream.token_key),
        lifetime_ms = downstream.token_lifetime_ms,
        "Private service configured"
    );

    let client = Arc::new(PrivateServiceClient::new(downstream, &config.http)?);
    let phrases = Arc::new(RandomPhraseSource::new());
    let message_service = Arc::new(MessageService::new(
        phrases,
        client,
        DownstreamTokenConfig::from(downstream),
    ));

    let state = web::Data::new(PublicState { message_service });
    let auth = TokenAuth::new(&config.auth);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_public_app(state.clone(), auth.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
