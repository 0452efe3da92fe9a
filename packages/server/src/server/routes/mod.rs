// HTTP routes
pub mod events;
pub mod health;
pub mod login;
pub mod logout;
pub mod state;
pub mod station;
pub mod violation;

pub use events::*;
pub use health::*;
pub use login::*;
pub use logout::*;
pub use state::*;
pub use station::*;
pub use violation::*;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use uuid::Uuid;

use crate::domains::presence::PresenceError;

/// Camera clients send JSON bodies; any body the extractor cannot produce
/// reads as a missing body.
pub(crate) fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, PresenceError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(_) => Err(PresenceError::Validation("Missing request body".into())),
    }
}

/// Absent and empty-string fields both read as missing.
pub(crate) fn require_field(value: Option<String>, name: &str) -> Result<String, PresenceError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| PresenceError::Validation(format!("Missing {name}")))
}

/// A malformed station id can never match a station, so it reads as
/// "not found" rather than a parse error.
pub(crate) fn parse_station_id(raw: &str) -> Result<Uuid, PresenceError> {
    Uuid::parse_str(raw)
        .map_err(|_| PresenceError::NotFound(format!("Station with id '{raw}' not found")))
}
