use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Maker roster entry.
///
/// `external_label` is the physical identifier on the badge (for the pilot
/// floor these are printed numbers like "67"). The vision pipeline reports
/// this label, never the UUID.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Maker {
    pub id: Uuid,
    pub display_name: String,
    pub external_label: String,
}

impl Maker {
    /// Find maker by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, display_name, external_label FROM makers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find maker by badge label
    pub async fn find_by_label(external_label: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, display_name, external_label FROM makers WHERE external_label = $1",
        )
        .bind(external_label)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
