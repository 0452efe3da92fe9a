use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    database: DatabaseHealth,
    event_stream: EventStreamHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
pub struct EventStreamHealth {
    status: String,
    observers: usize,
}

/// Health check endpoint
///
/// Checks:
/// - Store connectivity and responsiveness (cheap read, 5s timeout)
/// - Event stream observer count
///
/// Returns 200 OK if all systems are healthy, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    // Check store connection and measure responsiveness
    let db_health = match tokio::time::timeout(
        std::time::Duration::from_secs(5),
        state.deps.store.list_station_statuses(),
    )
    .await
    {
        Ok(Ok(_)) => DatabaseHealth {
            status: "ok".to_string(),
            error: None,
        },
        Ok(Err(e)) => DatabaseHealth {
            status: "error".to_string(),
            error: Some(format!("Query failed: {}", e)),
        },
        Err(_) => DatabaseHealth {
            status: "error".to_string(),
            error: Some("Query timeout (>5s)".to_string()),
        },
    };

    // The hub is always available once the app is up; observer count tells
    // us whether any dashboard is actually watching.
    let stream_health = EventStreamHealth {
        status: "ok".to_string(),
        observers: state.deps.events.observer_count(),
    };

    // Determine overall health
    let is_healthy = db_health.status == "ok";

    let overall_status = if is_healthy {
        "healthy"
    } else {
        "unhealthy"
    };

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall_status.to_string(),
            database: db_health,
            event_stream: stream_health,
        }),
    )
}
