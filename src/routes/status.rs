use actix_web::{web, HttpResponse, Responder};
use crate::models::{HealthResponse, RootResponse};

const SERVICE_NAME: &str = "vegetation-management-agent";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Vegetation Management Agent API".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint
///
/// The service holds no external connections, so it is healthy whenever it
/// can answer.
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: chrono::Utc::now(),
    })
}
