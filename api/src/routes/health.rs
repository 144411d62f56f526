use actix_web::{web, HttpResponse};
use courier_shared::types::HealthResponse;

/// Identity reported by the health endpoint
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: &'static str,
}

/// Handler for GET /health; unauthenticated
pub async fn health_check(info: web::Data<ServiceInfo>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(info.name, env!("CARGO_PKG_VERSION")))
}
