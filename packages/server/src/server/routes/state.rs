//! Full shop snapshot endpoint.
//!
//! GET /state
//!
//! Dashboards call this once on load, then keep themselves current from
//! the event stream.

use axum::{extract::Extension, Json};

use crate::domains::presence::actions;
use crate::domains::presence::data::ShopState;
use crate::domains::presence::PresenceError;
use crate::server::app::AppState;

pub async fn state_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<ShopState>, PresenceError> {
    let snapshot = actions::shop_state(&state.deps).await?;
    Ok(Json(snapshot))
}
