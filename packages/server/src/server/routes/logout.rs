//! Full system reset endpoint.
//!
//! POST /logout
//!
//! Wipes every status row and every violation so the shop starts the day
//! from a blank slate. The maker and station rosters survive the reset.

use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::domains::presence::actions;
use crate::domains::presence::PresenceError;
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct ResetDetails {
    maker_statuses_cleared: u64,
    station_statuses_cleared: u64,
    violations_cleared: u64,
    makers_preserved: bool,
    stations_preserved: bool,
}

#[derive(Serialize)]
pub struct LogoutResponse {
    success: bool,
    message: String,
    reset_type: String,
    details: ResetDetails,
}

pub async fn logout_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<LogoutResponse>, PresenceError> {
    let summary = actions::reset_system(&state.deps).await?;

    Ok(Json(LogoutResponse {
        success: true,
        message: "System has been fully reset".to_string(),
        reset_type: "full_system".to_string(),
        details: ResetDetails {
            maker_statuses_cleared: summary.maker_statuses_cleared,
            station_statuses_cleared: summary.station_statuses_cleared,
            violations_cleared: summary.violations_cleared,
            makers_preserved: true,
            stations_preserved: true,
        },
    }))
}
