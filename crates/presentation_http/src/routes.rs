//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_bytes;

    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/v1/system/status", get(handlers::system::status))
        // Document API (v1)
        .route(
            "/v1/documents/clauses",
            post(handlers::documents::extract_clauses),
        )
        // Compliance API (v1)
        .route(
            "/v1/compliance/check",
            post(handlers::compliance::check_clauses),
        )
        .route(
            "/v1/compliance/review",
            post(handlers::compliance::review_document),
        )
        .layer(DefaultBodyLimit::max(max_upload))
        // Attach state
        .with_state(state)
}

/// CORS layer for the configured origins
///
/// An empty origin list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}

/// Router with tracing and (optionally) CORS applied
pub fn create_app(state: AppState) -> Router {
    let server = state.config.server.clone();
    let app = create_router(state).layer(TraceLayer::new_for_http());

    if server.cors_enabled {
        app.layer(cors_layer(&server.allowed_origins))
    } else {
        app
    }
}
