//! Integration tests for the private service

use std::sync::Arc;

use actix_web::{test, web};

use courier_api::{create_private_app, middleware::auth::TokenAuth, routes::PrivateState};
use courier_core::domain::value_objects::correlation::CORRELATION_ID_HEADER;
use courier_core::domain::value_objects::scope::{PRIVATE_SERVICE, PUBLIC_SERVICE};
use courier_core::services::message::PhraseSource;
use courier_core::services::token;
use courier_shared::config::AuthConfig;
use courier_shared::errors::error_messages;

const KEY: &str = "XYZ789-private-service-key";

struct HelloWorld;

impl PhraseSource for HelloWorld {
    fn phrase(&self) -> String {
        "Hello World!".to_string()
    }
}

macro_rules! private_app {
    () => {
        test::init_service(create_private_app(
            web::Data::new(PrivateState {
                phrases: Arc::new(HelloWorld),
            }),
            TokenAuth::new(&AuthConfig::new(KEY, [PRIVATE_SERVICE])),
        ))
        .await
    };
}

#[actix_web::test]
async fn test_returns_text_for_private_scope() {
    let app = private_app!();

    let token = token::issue_with_lifetime(KEY, 10_000, [PRIVATE_SERVICE]).unwrap();
    let req = test::TestRequest::get()
        .uri("/message")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .insert_header((CORRELATION_ID_HEADER, "from-public"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get(CORRELATION_ID_HEADER).unwrap(), "from-public");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "text": "Hello World!" }));
}

#[actix_web::test]
async fn test_public_scope_is_not_accepted() {
    let app = private_app!();

    // PUBLIC_SERVICE is outside this service's whitelist, so the whole token is invalid
    let token = token::issue_with_lifetime(KEY, 10_000, [PRIVATE_SERVICE, PUBLIC_SERVICE]).unwrap();
    let req = test::TestRequest::get()
        .uri("/message")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["message"], error_messages::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_missing_token_is_rejected() {
    let app = private_app!();

    let req = test::TestRequest::get().uri("/message").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_unknown_path_returns_not_found() {
    let app = private_app!();

    let token = token::issue_with_lifetime(KEY, 10_000, [PRIVATE_SERVICE]).unwrap();
    let req = test::TestRequest::get()
        .uri("/invalidResource")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], error_messages::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_reports_service_name() {
    let app = private_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["service"], "private-service");
}
