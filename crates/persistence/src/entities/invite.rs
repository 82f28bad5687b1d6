//! Invite entity (database row mapping).

use chrono::{NaiveDateTime, TimeZone, Utc};
use domain::models::Invite;
use sqlx::FromRow;

/// Database row mapping for the invites table.
///
/// Legacy `code` and `created_by` columns may exist on older databases;
/// they are never read.
#[derive(Debug, Clone, FromRow)]
pub struct InviteEntity {
    pub id: i64,
    pub person_name: String,
    pub village_name: String,
    pub total_people: i32,
    /// Stored as a zone-less DATETIME holding UTC.
    pub created_at: NaiveDateTime,
}

impl From<InviteEntity> for Invite {
    fn from(entity: InviteEntity) -> Self {
        Self {
            id: entity.id,
            person_name: entity.person_name,
            village_name: entity.village_name,
            total_people: entity.total_people,
            created_at: Utc.from_utc_datetime(&entity.created_at),
        }
    }
}
