use actix_web::{web, HttpResponse};
use crate::error::ApiError;
use crate::routes::method_not_allowed;
use crate::services::{issue_token, stub_user};

/// Configure auth stub routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/auth/login")
            .route(web::post().to(login))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/auth/register")
            .route(web::post().to(login))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/auth/me")
            .route(web::get().to(me))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Login and register both hand out a token for the demo user
///
/// The request body is accepted as is and ignored.
async fn login(_body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let token = issue_token();
    tracing::debug!("Issued token for demo user {}", token.user.id);
    Ok(HttpResponse::Ok().json(token))
}

async fn me() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(stub_user()))
}
