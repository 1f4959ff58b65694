use actix_web::{web, HttpResponse, Responder};
use crate::models::{HealthResponse, IndexResponse};
use crate::routes::method_not_allowed;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn index() -> impl Responder {
    HttpResponse::Ok().json(IndexResponse {
        message: "Pet Help Platform API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: [
            "/api/v1/animals",
            "/api/v1/animals/feed",
            "/api/v1/auth/login",
            "/api/v1/swipes",
            "/api/v1/swipes/matches",
            "/api/v1/swipes/history",
        ]
        .iter()
        .map(|e| e.to_string())
        .collect(),
    })
}

