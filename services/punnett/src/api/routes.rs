use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{calculate, calculate_dihybrid, health, list_loci, AppState};
use crate::config::ServerConfig;

/// Build the HTTP router.
///
/// Routes:
/// - GET  /health                          -> {"status":"ok"}
/// - GET  /api/genetics/loci               -> configured loci
/// - POST /api/genetics/calculate          -> single-locus cross
/// - POST /api/genetics/calculate-dihybrid -> two-locus cross
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/api/genetics/loci", get(list_loci))
        .route("/api/genetics/calculate", post(calculate))
        .route("/api/genetics/calculate-dihybrid", post(calculate_dihybrid))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if server.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
