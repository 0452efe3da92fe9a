//! Presence data types
//!
//! Public API representations shared by HTTP responses and broadcast events.
//! Dashboards consume the same shapes either way, so they are built here once
//! instead of ad hoc per route.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domains::presence::models::{Maker, MakerPresence, Station, Violation};

/// Maker as shown to dashboards.
///
/// `status` is omitted from check-out payloads - the maker no longer has one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MakerData {
    pub id: Uuid,
    pub display_name: String,
    pub external_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MakerPresence>,
}

impl MakerData {
    pub fn with_status(maker: &Maker, status: MakerPresence) -> Self {
        Self {
            id: maker.id,
            display_name: maker.display_name.clone(),
            external_label: maker.external_label.clone(),
            status: Some(status),
        }
    }

    pub fn checked_out(maker: &Maker) -> Self {
        Self {
            id: maker.id,
            display_name: maker.display_name.clone(),
            external_label: maker.external_label.clone(),
            status: None,
        }
    }
}

/// Station as shown to dashboards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationData {
    pub id: Uuid,
    pub name: String,
    pub in_use: bool,
}

impl StationData {
    pub fn new(station: &Station, in_use: bool) -> Self {
        Self {
            id: station.id,
            name: station.name.clone(),
            in_use,
        }
    }
}

/// Violation as shown to dashboards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationData {
    pub id: Uuid,
    pub violation_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Violation> for ViolationData {
    fn from(violation: &Violation) -> Self {
        Self {
            id: violation.id,
            violation_type: violation.violation_type.clone(),
            image_url: violation.image_url.clone(),
            created_at: violation.created_at,
        }
    }
}

// =============================================================================
// Action outcomes
// =============================================================================

/// Which way a presence toggle resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Login,
    Leave,
}

/// Result of a presence toggle.
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub action: ToggleAction,
    pub maker: MakerData,
}

/// Result of a maker claiming a station.
#[derive(Debug, Clone)]
pub struct StationEntry {
    pub maker: MakerData,
    pub station: StationData,
}

/// Result of vacating a station.
///
/// `maker` is None when the station had no active maker to release.
#[derive(Debug, Clone)]
pub struct StationExit {
    pub station: StationData,
    pub maker: Option<MakerData>,
}

/// Result of recording a violation.
#[derive(Debug, Clone)]
pub struct ViolationReport {
    pub violation: ViolationData,
    pub maker: MakerData,
    pub station: StationData,
}

/// Counts from a full-system reset.
#[derive(Debug, Clone, Serialize)]
pub struct ResetSummary {
    pub maker_statuses_cleared: u64,
    pub station_statuses_cleared: u64,
    pub violations_cleared: u64,
}

// =============================================================================
// Shop state snapshot (GET /state)
// =============================================================================

/// A checked-in maker with their current station, if any
#[derive(Debug, Clone, Serialize)]
pub struct PresentMaker {
    pub id: Uuid,
    pub display_name: String,
    pub external_label: String,
    pub status: MakerPresence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<Uuid>,
}

/// A station's occupancy, joined with its roster name
#[derive(Debug, Clone, Serialize)]
pub struct StationOccupancy {
    pub id: Uuid,
    pub name: String,
    pub in_use: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_maker_id: Option<Uuid>,
}

/// An unresolved violation in the snapshot
#[derive(Debug, Clone, Serialize)]
pub struct OpenViolation {
    pub id: Uuid,
    pub maker_id: Uuid,
    pub station_id: Uuid,
    pub violation_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Violation> for OpenViolation {
    fn from(violation: &Violation) -> Self {
        Self {
            id: violation.id,
            maker_id: violation.maker_id,
            station_id: violation.station_id,
            violation_type: violation.violation_type.clone(),
            image_url: violation.image_url.clone(),
            created_at: violation.created_at,
        }
    }
}

/// Full live snapshot for dashboard bootstrap.
///
/// After a reset all three lists are empty; stations only appear once they
/// have been used (an occupancy row exists).
#[derive(Debug, Clone, Serialize)]
pub struct ShopState {
    pub makers: Vec<PresentMaker>,
    pub stations: Vec<StationOccupancy>,
    pub violations: Vec<OpenViolation>,
}
