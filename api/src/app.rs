//! Application factories
//!
//! Both services share the same middleware stack. Wrapping order matters:
//! the last `wrap` runs first, so requests pass through the tracing root
//! span, then the correlation middleware, then the authentication gate.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use tracing_actix_web::TracingLogger;

use courier_core::services::message::{DownstreamMessageClient, PhraseSource};

use crate::handlers::error::{method_not_allowed, not_found};
use crate::middleware::{auth::TokenAuth, correlation::CorrelationMiddleware};
use crate::routes::{health_check, message, private_message, PrivateState, PublicState, ServiceInfo};

/// Create the public service application
pub fn create_public_app<P, D>(
    state: web::Data<PublicState<P, D>>,
    auth: TokenAuth,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: PhraseSource + 'static,
    D: DownstreamMessageClient + 'static,
{
    App::new()
        .app_data(state)
        .app_data(web::Data::new(ServiceInfo {
            name: "public-service",
        }))
        .wrap(auth)
        .wrap(CorrelationMiddleware::new())
        .wrap(TracingLogger::default())
        .service(
            web::resource("/health")
                .route(web::get().to(health_check))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/message")
                .route(web::get().to(message::<P, D>))
                .default_service(web::route().to(method_not_allowed)),
        )
        .default_service(web::to(not_found))
}

/// Create the private service application
pub fn create_private_app<P>(
    state: web::Data<PrivateState<P>>,
    auth: TokenAuth,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: PhraseSource + 'static,
{
    App::new()
        .app_data(state)
        .app_data(web::Data::new(ServiceInfo {
            name: "private-service",
        }))
        .wrap(auth)
        .wrap(CorrelationMiddleware::new())
        .wrap(TracingLogger::default())
        .service(
            web::resource("/health")
                .route(web::get().to(health_check))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/message")
                .route(web::get().to(private_message::<P>))
                .default_service(web::route().to(method_not_allowed)),
        )
        .default_service(web::to(not_found))
}
