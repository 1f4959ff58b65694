use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::filter_feed;
use crate::error::ApiError;
use crate::models::{FeedQuery, NewAnimalRequest};
use crate::routes::{method_not_allowed, AppState};

/// Configure animal feed routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/animals")
            .route(web::get().to(get_feed))
            .route(web::post().to(create_animal))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/animals/feed")
            .route(web::get().to(get_feed))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/animals/{id}")
            .route(web::get().to(get_animal))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Live feed endpoint
///
/// GET /api/v1/animals
/// GET /api/v1/animals/feed
///
/// Optional query filters: `type`, `size`, `status`, `location`. Filters
/// narrow the response only; the live feed itself is untouched.
async fn get_feed(
    state: web::Data<AppState>,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse, ApiError> {
    let feed = state.store.get_feed().await;
    let total = feed.len();
    let feed = filter_feed(feed, &query);

    tracing::debug!("Serving {} of {} live animals", feed.len(), total);

    Ok(HttpResponse::Ok().json(feed))
}

/// GET /api/v1/animals/{id}
async fn get_animal(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let animal = state.store.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(animal))
}

/// Create animal endpoint
///
/// POST /api/v1/animals
///
/// Request body (all fields optional, unknown fields rejected):
/// ```json
/// {
///   "name": "string",
///   "type": "dog|cat|bird|rabbit|other",
///   "breed": "string",
///   "age": 3,
///   "size": "small|medium|large",
///   "status": "lost|found|in_shelter|adopted|needs_help|available",
///   "location": "string",
///   "good_with_kids": true,
///   "good_with_pets": false
/// }
/// ```
async fn create_animal(
    state: web::Data<AppState>,
    req: web::Json<NewAnimalRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_animal request: {:?}", errors);
        return Err(errors.into());
    }

    let animal = state.store.add_animal(req.into_inner()).await;
    Ok(HttpResponse::Ok().json(animal))
}
