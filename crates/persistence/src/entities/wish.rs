//! Wish entity (database row mapping).

use chrono::{NaiveDateTime, TimeZone, Utc};
use domain::models::Wish;
use sqlx::FromRow;

/// Database row mapping for the wishes table.
#[derive(Debug, Clone, FromRow)]
pub struct WishEntity {
    pub id: i64,
    pub name: String,
    pub message: String,
    /// Stored as a zone-less DATETIME holding UTC.
    pub created_at: NaiveDateTime,
}

impl From<WishEntity> for Wish {
    fn from(entity: WishEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            message: entity.message,
            created_at: Utc.from_utc_datetime(&entity.created_at),
        }
    }
}
