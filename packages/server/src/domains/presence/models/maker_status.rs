use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Presence state of a checked-in maker.
#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(type_name = "maker_presence", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MakerPresence {
    Idle,
    Active,
    Violation,
}

/// Maker presence row. Exists only while the maker is checked in; check-out
/// deletes it rather than flipping a flag.
///
/// Invariant: `station_id` is set exactly when `status` is not `idle`. The
/// constructors below are the only places rows are built, so the pairing
/// can't drift.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct MakerStatus {
    pub maker_id: Uuid,
    pub status: MakerPresence,
    pub station_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl MakerStatus {
    /// Row for a maker idling in the shop (checked in, not at any station).
    pub fn idle(maker_id: Uuid) -> Self {
        Self {
            maker_id,
            status: MakerPresence::Idle,
            station_id: None,
            updated_at: Utc::now(),
        }
    }

    /// Row for a maker working at a station.
    pub fn active_at(maker_id: Uuid, station_id: Uuid) -> Self {
        Self {
            maker_id,
            status: MakerPresence::Active,
            station_id: Some(station_id),
            updated_at: Utc::now(),
        }
    }

    /// Row for a maker flagged with a safety violation at a station.
    pub fn violation_at(maker_id: Uuid, station_id: Uuid) -> Self {
        Self {
            maker_id,
            status: MakerPresence::Violation,
            station_id: Some(station_id),
            updated_at: Utc::now(),
        }
    }

    /// Find status row for a maker
    pub async fn find_by_maker(maker_id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM maker_status WHERE maker_id = $1")
            .bind(maker_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All status rows, most recently touched first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM maker_status ORDER BY updated_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert or overwrite this maker's row. `updated_at` is set by the database.
    pub async fn upsert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO maker_status (maker_id, status, station_id, updated_at)
             VALUES ($1, $2, $3, now())
             ON CONFLICT (maker_id)
             DO UPDATE SET status = EXCLUDED.status,
                           station_id = EXCLUDED.station_id,
                           updated_at = now()
             RETURNING *",
        )
        .bind(self.maker_id)
        .bind(self.status)
        .bind(self.station_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete the row for a maker (check-out). Missing row is a no-op.
    pub async fn delete_by_maker(maker_id: Uuid, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM maker_status WHERE maker_id = $1")
            .bind(maker_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete all rows; returns how many were removed
    pub async fn delete_all(pool: &PgPool) -> Result<u64> {
        let result = sqlx::query("DELETE FROM maker_status").execute(pool).await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_pair_status_with_station() {
        let maker_id = Uuid::new_v4();
        let station_id = Uuid::new_v4();

        let idle = MakerStatus::idle(maker_id);
        assert_eq!(idle.status, MakerPresence::Idle);
        assert!(idle.station_id.is_none());

        let active = MakerStatus::active_at(maker_id, station_id);
        assert_eq!(active.status, MakerPresence::Active);
        assert_eq!(active.station_id, Some(station_id));

        let violation = MakerStatus::violation_at(maker_id, station_id);
        assert_eq!(violation.status, MakerPresence::Violation);
        assert_eq!(violation.station_id, Some(station_id));
    }
}
