use actix_web::{web, HttpResponse};
use crate::error::ApiError;
use crate::models::{HistoryQuery, SwipeRequest};
use crate::routes::{method_not_allowed, AppState};
use crate::services::STUB_USER_ID;

/// Configure swipe routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/swipes")
            .route(web::post().to(record_swipe))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/swipes/matches")
            .route(web::get().to(list_matches))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/swipes/history")
            .route(web::get().to(swipe_history))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Record swipe endpoint
///
/// POST /api/v1/swipes
///
/// Request body:
/// ```json
/// {
///   "animal_id": 1,
///   "direction": "left|right|super_like"
/// }
/// ```
///
/// Any direction string is accepted; only `right` and `super_like` match.
async fn record_swipe(
    state: web::Data<AppState>,
    req: web::Json<SwipeRequest>,
) -> Result<HttpResponse, ApiError> {
    let SwipeRequest { animal_id, direction } = req.into_inner();

    let swipe = state
        .store
        .record_swipe(STUB_USER_ID, animal_id, direction)
        .await;

    Ok(HttpResponse::Ok().json(swipe))
}

/// GET /api/v1/swipes/matches
async fn list_matches(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.store.list_matches().await))
}

/// Swipe history, newest first
///
/// GET /api/v1/swipes/history?skip={skip}&limit={limit}
async fn swipe_history(
    state: web::Data<AppState>,
    query: web::Query<HistoryQuery>,
) -> Result<HttpResponse, ApiError> {
    // Cap limit to the configured page size
    let limit = query.limit.min(state.history_limit);
    let swipes = state.store.history(query.skip, limit).await;
    Ok(HttpResponse::Ok().json(swipes))
}
