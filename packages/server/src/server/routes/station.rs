//! Station occupancy endpoints.
//!
//! POST /station/enter
//! POST /station/leave
//!
//! Station cameras call these when a maker sits down at a machine or walks
//! away from it. Enter rejects a station that someone else already holds.

use axum::extract::rejection::JsonRejection;
use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domains::presence::actions;
use crate::domains::presence::data::{MakerData, StationData};
use crate::domains::presence::PresenceError;
use crate::server::app::AppState;
use crate::server::routes::{parse_station_id, require_body, require_field};

#[derive(Deserialize)]
pub struct StationEnterRequest {
    #[serde(default)]
    external_label: Option<String>,
    #[serde(default)]
    station_id: Option<String>,
}

#[derive(Serialize)]
pub struct StationEnterResponse {
    success: bool,
    message: String,
    maker: MakerData,
    station: StationData,
}

pub async fn station_enter_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<StationEnterRequest>, JsonRejection>,
) -> Result<Json<StationEnterResponse>, PresenceError> {
    let request = require_body(payload)?;
    let external_label = require_field(request.external_label, "external_label")?;
    let station_id = parse_station_id(&require_field(request.station_id, "station_id")?)?;

    let entry = actions::enter_station(&state.deps, &external_label, station_id).await?;

    let message = format!(
        "Maker '{}' entered station '{}'",
        entry.maker.display_name, entry.station.name
    );

    Ok(Json(StationEnterResponse {
        success: true,
        message,
        maker: entry.maker,
        station: entry.station,
    }))
}

#[derive(Deserialize)]
pub struct StationLeaveRequest {
    #[serde(default)]
    station_id: Option<String>,
}

#[derive(Serialize)]
pub struct StationLeaveResponse {
    success: bool,
    message: String,
    station: StationData,
    #[serde(skip_serializing_if = "Option::is_none")]
    maker: Option<MakerData>,
}

pub async fn station_leave_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<StationLeaveRequest>, JsonRejection>,
) -> Result<Json<StationLeaveResponse>, PresenceError> {
    let request = require_body(payload)?;
    let station_id = parse_station_id(&require_field(request.station_id, "station_id")?)?;

    let exit = actions::leave_station(&state.deps, station_id).await?;

    let message = match &exit.maker {
        Some(maker) => format!(
            "Maker '{}' left station '{}'",
            maker.display_name, exit.station.name
        ),
        None => format!("Station '{}' is now vacant", exit.station.name),
    };

    Ok(Json(StationLeaveResponse {
        success: true,
        message,
        station: exit.station,
        maker: exit.maker,
    }))
}
