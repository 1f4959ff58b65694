use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use pet_help_api::config::{LoggingSettings, Settings};
use pet_help_api::error::{handle_json_payload_error, handle_path_error, handle_query_payload_error};
use pet_help_api::routes::{self, AppState};
use pet_help_api::services::AdoptionStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging from settings; `RUST_LOG` takes precedence over the
/// configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_tracing(&settings.logging);

    info!("Starting Pet Help API...");

    let store = AdoptionStore::from_settings(&settings.catalog).map_err(|e| {
        error!("Failed to build feed store: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    let app_state = AppState {
        store: Arc::new(store),
        history_limit: settings.feed.history_limit,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} ({} workers)", host, port, workers);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(handle_json_payload_error),
            )
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
            .default_service(web::to(routes::fallback))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
