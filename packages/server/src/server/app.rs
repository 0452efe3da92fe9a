//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    events_handler, health_handler, logout_handler, state_handler, station_enter_handler,
    station_leave_handler, toggle_handler, violation_create_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: Arc<ServerDeps>, allowed_origins: &[String]) -> Router {
    let app_state = AppState { deps };

    Router::new()
        // Camera-facing endpoints
        .route("/login/toggle", post(toggle_handler))
        .route("/station/enter", post(station_enter_handler))
        .route("/station/leave", post(station_leave_handler))
        .route("/violation/create", post(violation_create_handler))
        .route("/logout", post(logout_handler))
        // Dashboard-facing endpoints
        .route("/state", get(state_handler))
        .route("/events", get(events_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// CORS configuration for the dashboard origins.
///
/// An empty list or a literal `*` opens the API to any origin; cameras and
/// dashboards on the shop network run on whatever host is handy.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}
