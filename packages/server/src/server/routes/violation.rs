//! Safety violation endpoint.
//!
//! POST /violation/create
//!
//! Station cameras report safety violations they detect (missing goggles,
//! loose clothing near a spindle). The violation is pinned to whoever is
//! active at the station; an idle station cannot produce one.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domains::presence::actions;
use crate::domains::presence::data::{MakerData, StationData, ViolationData};
use crate::domains::presence::PresenceError;
use crate::server::app::AppState;
use crate::server::routes::{parse_station_id, require_body, require_field};

#[derive(Deserialize)]
pub struct ViolationCreateRequest {
    #[serde(default)]
    station_id: Option<String>,
    #[serde(default)]
    violation_type: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Serialize)]
pub struct ViolationCreateResponse {
    success: bool,
    message: String,
    violation: ViolationData,
    maker: MakerData,
    station: StationData,
}

pub async fn violation_create_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ViolationCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ViolationCreateResponse>), PresenceError> {
    let request = require_body(payload)?;
    let station_id = parse_station_id(&require_field(request.station_id, "station_id")?)?;
    let violation_type = require_field(request.violation_type, "violation_type")?;

    let report = actions::create_violation(
        &state.deps,
        station_id,
        &violation_type,
        request.image_url.as_deref(),
    )
    .await?;

    let message = format!(
        "Violation '{}' recorded for maker '{}' at station '{}'",
        report.violation.violation_type, report.maker.display_name, report.station.name
    );

    Ok((
        StatusCode::CREATED,
        Json(ViolationCreateResponse {
            success: true,
            message,
            violation: report.violation,
            maker: report.maker,
            station: report.station,
        }),
    ))
}
