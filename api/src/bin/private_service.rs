//! Private service: message endpoint reachable only with a service token

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use courier_api::{
    create_private_app, middleware::auth::TokenAuth, routes::PrivateState, telemetry,
};
use courier_infra::RandomPhraseSource;
use courier_shared::config::{AppConfig, ServiceProfile};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let profile = ServiceProfile::PRIVATE;
    let config = AppConfig::load(&profile)
        .with_context(|| format!("failed to load {} configuration", profile.name))?;

    telemetry::init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting {}", profile.name);

    let state = web::Data::new(PrivateState {
        phrases: Arc::new(RandomPhraseSource::new()),
    });
    let auth = TokenAuth::new(&config.auth);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_private_app(state.clone(), auth.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
