use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Station occupancy row. Created the first time a station is used and
/// updated in place afterwards.
///
/// Invariant: `active_maker_id` is set exactly when `in_use` is true; the
/// `occupied`/`vacant` constructors keep the pairing honest.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct StationStatus {
    pub station_id: Uuid,
    pub in_use: bool,
    pub active_maker_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl StationStatus {
    /// Row for a station claimed by a maker.
    pub fn occupied(station_id: Uuid, maker_id: Uuid) -> Self {
        Self {
            station_id,
            in_use: true,
            active_maker_id: Some(maker_id),
            updated_at: Utc::now(),
        }
    }

    /// Row for a free station.
    pub fn vacant(station_id: Uuid) -> Self {
        Self {
            station_id,
            in_use: false,
            active_maker_id: None,
            updated_at: Utc::now(),
        }
    }

    /// Find occupancy row for a station
    pub async fn find_by_station(station_id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM station_status WHERE station_id = $1")
            .bind(station_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All occupancy rows, most recently touched first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM station_status ORDER BY updated_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert or overwrite this station's row. `updated_at` is set by the database.
    pub async fn upsert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO station_status (station_id, in_use, active_maker_id, updated_at)
             VALUES ($1, $2, $3, now())
             ON CONFLICT (station_id)
             DO UPDATE SET in_use = EXCLUDED.in_use,
                           active_maker_id = EXCLUDED.active_maker_id,
                           updated_at = now()
             RETURNING *",
        )
        .bind(self.station_id)
        .bind(self.in_use)
        .bind(self.active_maker_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete all rows; returns how many were removed
    pub async fn delete_all(pool: &PgPool) -> Result<u64> {
        let result = sqlx::query("DELETE FROM station_status")
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
