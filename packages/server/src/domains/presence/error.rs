//! Presence error taxonomy and its HTTP mapping.
//!
//! Every refusal carries the message dashboards and the camera client
//! already display; the HTTP mapping lives in `IntoResponse` so handlers
//! can just use `?`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Everything a presence operation can refuse or fail with
#[derive(Error, Debug)]
pub enum PresenceError {
    /// Request body missing or a required field absent/empty (400)
    #[error("{0}")]
    Validation(String),

    /// Referenced maker or station does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Station already claimed by a different maker (409)
    #[error("Station '{station_name}' is already occupied")]
    StationOccupied {
        station_name: String,
        station_id: Uuid,
        active_maker_id: Option<Uuid>,
    },

    /// Check-out attempted inside the post-check-in window (429)
    #[error("Leave is on cooldown. Please wait {remaining_secs} more seconds.")]
    CooldownActive { remaining_secs: u64 },

    /// Operation is meaningless in the current state (400)
    #[error("{0}")]
    InvalidState(String),

    /// A violation is already open at the station and dedup is on (409)
    #[error("Violation already active at this station")]
    DuplicateViolation { existing_violation_id: Uuid },

    /// The store failed; nothing was decided about the request (500)
    #[error("{0}")]
    StoreUnavailable(#[from] anyhow::Error),
}

impl IntoResponse for PresenceError {
    fn into_response(self) -> Response {
        let status = match &self {
            PresenceError::Validation(_) | PresenceError::InvalidState(_) => {
                StatusCode::BAD_REQUEST
            }
            PresenceError::NotFound(_) => StatusCode::NOT_FOUND,
            PresenceError::StationOccupied { .. } | PresenceError::DuplicateViolation { .. } => {
                StatusCode::CONFLICT
            }
            PresenceError::CooldownActive { .. } => StatusCode::TOO_MANY_REQUESTS,
            PresenceError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            PresenceError::CooldownActive { remaining_secs } => json!({
                "error": self.to_string(),
                "cooldown_remaining": remaining_secs,
                "action": "cooldown",
            }),
            PresenceError::StationOccupied {
                station_id,
                active_maker_id,
                ..
            } => json!({
                "error": self.to_string(),
                "station_id": station_id,
                "active_maker_id": active_maker_id,
            }),
            PresenceError::DuplicateViolation {
                existing_violation_id,
            } => json!({
                "success": false,
                "message": self.to_string(),
                "existing_violation_id": existing_violation_id,
            }),
            PresenceError::StoreUnavailable(err) => {
                tracing::error!(error = %err, "shop store failure");
                json!({ "error": err.to_string() })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
