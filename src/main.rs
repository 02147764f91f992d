use actix_cors::Cors;
use actix_web::{error, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use matchmate::config::Settings;
use matchmate::core::{MatchStateController, RandomPicker, SyncPipeline};
use matchmate::models::{ErrorResponse, ReferencePoint};
use matchmate::routes::{self, matches::AppState};
use matchmate::services::{RandomFailurePolicy, RandomUserClient, SqliteProfileStore};

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let body = ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    };
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt().with_target(false).with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting MatchMate engine...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Open the local profile store
    let store = Arc::new(
        SqliteProfileStore::new(&settings.database.url)
            .await
            .unwrap_or_else(|e| {
                error!("Failed to open profile store: {}", e);
                panic!("Store error: {}", e);
            }),
    );

    info!("Profile store opened at {}", settings.database.url);

    // Remote profile source with the configured flakiness
    let source = Arc::new(RandomUserClient::new(
        settings.source.base_url.clone(),
        Box::new(RandomFailurePolicy::new(settings.source.failure_rate)),
    ));

    info!(
        "Profile source initialized ({}, failure rate {})",
        settings.source.base_url, settings.source.failure_rate
    );

    // Scoring reference point for this session
    let reference = ReferencePoint {
        age: settings.scoring.reference_age,
        city: settings.scoring.reference_city.clone(),
    };

    let pipeline = SyncPipeline::new(
        source,
        store.clone(),
        Arc::new(RandomPicker),
        reference,
        settings.source.batch_size,
    );

    let controller = Arc::new(MatchStateController::new(pipeline, store));

    // Initial load in the background so the server is reachable immediately
    let initial = controller.clone();
    tokio::spawn(async move {
        initial.load().await;
        let snapshot = initial.snapshot().await;
        info!(
            "Initial load complete: {} profiles{}",
            snapshot.profiles.len(),
            snapshot
                .session
                .error
                .map(|e| format!(" ({})", e))
                .unwrap_or_default()
        );
    });

    let app_state = AppState { controller };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
