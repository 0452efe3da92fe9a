// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "toggle presence") should be domain actions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseShopStore)

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domains::presence::models::{Maker, MakerStatus, Station, StationStatus, Violation};

// =============================================================================
// Shop Store Trait (Infrastructure - persistence gateway)
// =============================================================================

/// Pure CRUD over the presence tables. No state-machine rules live here;
/// actions compose these calls and decide what is legal.
#[async_trait]
pub trait BaseShopStore: Send + Sync {
    // Roster (read-only - rows are seeded out of band)

    /// Look up a maker by the label printed on their badge
    async fn find_maker_by_label(&self, external_label: &str) -> Result<Option<Maker>>;

    async fn find_maker(&self, maker_id: Uuid) -> Result<Option<Maker>>;

    async fn find_station(&self, station_id: Uuid) -> Result<Option<Station>>;

    // Maker presence

    async fn maker_status(&self, maker_id: Uuid) -> Result<Option<MakerStatus>>;

    async fn list_maker_statuses(&self) -> Result<Vec<MakerStatus>>;

    /// Insert or overwrite a maker's presence row. Returns the stored row.
    async fn upsert_maker_status(&self, status: MakerStatus) -> Result<MakerStatus>;

    /// Remove a maker's presence row (check-out). Missing row is a no-op.
    async fn delete_maker_status(&self, maker_id: Uuid) -> Result<()>;

    // Station occupancy

    async fn station_status(&self, station_id: Uuid) -> Result<Option<StationStatus>>;

    async fn list_station_statuses(&self) -> Result<Vec<StationStatus>>;

    /// Insert or overwrite a station's occupancy row. Returns the stored row.
    async fn upsert_station_status(&self, status: StationStatus) -> Result<StationStatus>;

    // Violations

    async fn insert_violation(
        &self,
        maker_id: Uuid,
        station_id: Uuid,
        violation_type: &str,
        image_url: Option<&str>,
    ) -> Result<Violation>;

    /// Unresolved violations, newest first
    async fn open_violations(&self) -> Result<Vec<Violation>>;

    /// Most recent unresolved violation at a station, if any
    async fn open_violation_at_station(&self, station_id: Uuid) -> Result<Option<Violation>>;

    // Reset (full-system wipe of live state; the roster is untouched)

    async fn clear_maker_statuses(&self) -> Result<u64>;

    async fn clear_station_statuses(&self) -> Result<u64>;

    async fn clear_violations(&self) -> Result<u64>;
}
