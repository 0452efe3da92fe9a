//! Postgres-backed shop store.
//!
//! Thin adapter over the model methods; SQL lives with the models.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::presence::models::{Maker, MakerStatus, Station, StationStatus, Violation};
use crate::kernel::BaseShopStore;

/// Shop store backed by the Postgres presence tables
pub struct PostgresShopStore {
    pool: PgPool,
}

impl PostgresShopStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseShopStore for PostgresShopStore {
    async fn find_maker_by_label(&self, external_label: &str) -> Result<Option<Maker>> {
        Maker::find_by_label(external_label, &self.pool).await
    }

    async fn find_maker(&self, maker_id: Uuid) -> Result<Option<Maker>> {
        Maker::find_by_id(maker_id, &self.pool).await
    }

    async fn find_station(&self, station_id: Uuid) -> Result<Option<Station>> {
        Station::find_by_id(station_id, &self.pool).await
    }

    async fn maker_status(&self, maker_id: Uuid) -> Result<Option<MakerStatus>> {
        MakerStatus::find_by_maker(maker_id, &self.pool).await
    }

    async fn list_maker_statuses(&self) -> Result<Vec<MakerStatus>> {
        MakerStatus::find_all(&self.pool).await
    }

    async fn upsert_maker_status(&self, status: MakerStatus) -> Result<MakerStatus> {
        status.upsert(&self.pool).await
    }

    async fn delete_maker_status(&self, maker_id: Uuid) -> Result<()> {
        MakerStatus::delete_by_maker(maker_id, &self.pool).await
    }

    async fn station_status(&self, station_id: Uuid) -> Result<Option<StationStatus>> {
        StationStatus::find_by_station(station_id, &self.pool).await
    }

    async fn list_station_statuses(&self) -> Result<Vec<StationStatus>> {
        StationStatus::find_all(&self.pool).await
    }

    async fn upsert_station_status(&self, status: StationStatus) -> Result<StationStatus> {
        status.upsert(&self.pool).await
    }

    async fn insert_violation(
        &self,
        maker_id: Uuid,
        station_id: Uuid,
        violation_type: &str,
        image_url: Option<&str>,
    ) -> Result<Violation> {
        Violation::insert(maker_id, station_id, violation_type, image_url, &self.pool).await
    }

    async fn open_violations(&self) -> Result<Vec<Violation>> {
        Violation::find_open(&self.pool).await
    }

    async fn open_violation_at_station(&self, station_id: Uuid) -> Result<Option<Violation>> {
        Violation::find_open_at_station(station_id, &self.pool).await
    }

    async fn clear_maker_statuses(&self) -> Result<u64> {
        MakerStatus::delete_all(&self.pool).await
    }

    async fn clear_station_statuses(&self) -> Result<u64> {
        StationStatus::delete_all(&self.pool).await
    }

    async fn clear_violations(&self) -> Result<u64> {
        Violation::delete_all(&self.pool).await
    }
}
