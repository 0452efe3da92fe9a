//! Check-in toggle endpoint.
//!
//! POST /login/toggle
//!
//! Called by the entrance camera when it recognizes a badge. One route
//! covers both directions: no status row checks the maker in, an existing
//! row checks them out (subject to the leave cooldown).

use axum::extract::rejection::JsonRejection;
use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domains::presence::actions;
use crate::domains::presence::data::{MakerData, ToggleAction};
use crate::domains::presence::PresenceError;
use crate::server::app::AppState;
use crate::server::routes::{require_body, require_field};

#[derive(Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    external_label: Option<String>,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    success: bool,
    action: ToggleAction,
    message: String,
    maker: MakerData,
}

pub async fn toggle_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<Json<ToggleResponse>, PresenceError> {
    let request = require_body(payload)?;
    let external_label = require_field(request.external_label, "external_label")?;

    let outcome = actions::toggle_presence(&state.deps, &external_label).await?;

    let message = match outcome.action {
        ToggleAction::Login => format!("Maker '{}' checked in", outcome.maker.display_name),
        ToggleAction::Leave => format!("Maker '{}' checked out", outcome.maker.display_name),
    };

    Ok(Json(ToggleResponse {
        success: true,
        action: outcome.action,
        message,
        maker: outcome.maker,
    }))
}
