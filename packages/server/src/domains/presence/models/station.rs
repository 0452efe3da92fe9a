use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Station roster entry (a workstation on the shop floor).
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Station {
    pub id: Uuid,
    pub name: String,
}

impl Station {
    /// Find station by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, name FROM stations WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}
