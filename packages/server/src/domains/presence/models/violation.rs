use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Safety violation reported by the vision pipeline.
///
/// `violation_type` is a free-form code (e.g. "GOGGLES_NOT_WORN"); the server
/// records whatever the camera service sends. `resolved_at` stays NULL until
/// a resolution workflow exists, so "open" currently means "all of them".
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Violation {
    pub id: Uuid,
    pub maker_id: Uuid,
    pub station_id: Uuid,
    pub violation_type: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Violation {
    /// Insert a new violation; id and created_at come from the database
    pub async fn insert(
        maker_id: Uuid,
        station_id: Uuid,
        violation_type: &str,
        image_url: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO violations (maker_id, station_id, violation_type, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(maker_id)
        .bind(station_id)
        .bind(violation_type)
        .bind(image_url)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Unresolved violations, newest first
    pub async fn find_open(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM violations WHERE resolved_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Most recent unresolved violation at a station, if any
    pub async fn find_open_at_station(station_id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM violations
             WHERE station_id = $1 AND resolved_at IS NULL
             ORDER BY created_at DESC
             LIMIT 1",
        )
        .bind(station_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete all violations; returns how many were removed
    pub async fn delete_all(pool: &PgPool) -> Result<u64> {
        let result = sqlx::query("DELETE FROM violations").execute(pool).await?;

        Ok(result.rows_affected())
    }
}
