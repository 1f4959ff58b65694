// Route exports
pub mod animals;
pub mod auth;
pub mod swipes;
pub mod system;

use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use crate::error::ApiError;
use crate::services::AdoptionStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AdoptionStore>,
    pub history_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(system::configure).service(
        web::scope("/api/v1")
            .configure(animals::configure)
            .configure(swipes::configure)
            .configure(auth::configure),
    );
}

/// Default service for requests no route claimed
///
/// GET and POST on an unknown path are 404; other methods are 405.
pub async fn fallback(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let method = req.method();

    if *method == Method::GET || *method == Method::POST {
        tracing::debug!("No route for {} {}", method, req.path());
        Err(ApiError::NotFound("Not found".to_string()))
    } else if *method == Method::OPTIONS {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(ApiError::MethodNotSupported)
    }
}

/// Default service for known paths hit with an unsupported method
///
/// OPTIONS that CORS did not answer as a preflight is an empty 200, the same
/// as on unknown paths.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    if *req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }

    Err(ApiError::MethodNotSupported)
}
