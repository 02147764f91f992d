use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::MatchStateController;
use crate::models::{DecisionRequest, HealthResponse, MatchesResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<MatchStateController>,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches", web::get().to(get_matches))
        .route("/matches/refresh", web::post().to(refresh_matches))
        .route("/matches/{id}/decision", web::post().to(apply_decision))
        .route("/session/error", web::delete().to(clear_error));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Current published state, partitioned by decision status
///
/// GET /api/v1/matches
async fn get_matches(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.controller.snapshot().await;
    HttpResponse::Ok().json(MatchesResponse::from(snapshot))
}

/// Trigger a sync and return the resulting state
///
/// POST /api/v1/matches/refresh
///
/// Source and cache failures never surface as HTTP errors; they show up as
/// `session.error` in the returned state, the same way the app presents them.
async fn refresh_matches(state: web::Data<AppState>) -> impl Responder {
    state.controller.load().await;
    let snapshot = state.controller.snapshot().await;
    HttpResponse::Ok().json(MatchesResponse::from(snapshot))
}

/// Apply a user decision to a profile
///
/// POST /api/v1/matches/{id}/decision
///
/// Request body:
/// ```json
/// { "decision": "accept" | "decline" | "undo" }
/// ```
///
/// Deciding on an unknown id is a no-op, not an error.
async fn apply_decision(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<DecisionRequest>,
) -> impl Responder {
    let id = path.into_inner();

    tracing::info!("Applying decision {:?} to profile {}", req.decision, id);

    state
        .controller
        .decide(&id, req.decision.target_status())
        .await;

    let snapshot = state.controller.snapshot().await;
    HttpResponse::Ok().json(MatchesResponse::from(snapshot))
}

/// Dismiss the current error notice
///
/// DELETE /api/v1/session/error
async fn clear_error(state: web::Data<AppState>) -> impl Responder {
    state.controller.clear_error().await;
    let snapshot = state.controller.snapshot().await;
    HttpResponse::Ok().json(MatchesResponse::from(snapshot))
}
