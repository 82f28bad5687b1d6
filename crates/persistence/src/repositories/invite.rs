//! Invite repository for database operations.

use chrono::{DateTime, Utc};
use domain::models::{Invite, InviteDraft};
use domain::services::InviteStore;
use domain::StoreError;
use sqlx::MySqlPool;

use crate::entities::InviteEntity;
use crate::query_timer::QueryTimer;

/// Repository for invite-related database operations.
#[derive(Clone)]
pub struct InviteRepository {
    pool: MySqlPool,
}

impl InviteRepository {
    /// Creates a new InviteRepository with the given connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create a new invite.
    pub async fn create_invite(
        &self,
        person_name: &str,
        village_name: &str,
        total_people: i32,
        created_at: DateTime<Utc>,
    ) -> Result<InviteEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_invite");
        let inserted = sqlx::query(
            r#"
            INSERT INTO invites (person_name, village_name, total_people, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(person_name)
        .bind(village_name)
        .bind(total_people)
        .bind(created_at.naive_utc())
        .execute(&self.pool)
        .await;
        timer.record();

        let id = inserted?.last_insert_id();
        self.find_by_id(id as i64)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find invite by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<InviteEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_invite_by_id");
        let result = sqlx::query_as::<_, InviteEntity>(
            r#"
            SELECT id, person_name, village_name, total_people, created_at
            FROM invites
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all invites, oldest first.
    pub async fn list_invites(&self) -> Result<Vec<InviteEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_invites");
        let result = sqlx::query_as::<_, InviteEntity>(
            r#"
            SELECT id, person_name, village_name, total_people, created_at
            FROM invites
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Overwrite the editable fields of an invite. `created_at` is never touched.
    ///
    /// Returns false when no row has the given id.
    pub async fn update_invite(
        &self,
        id: i64,
        person_name: &str,
        village_name: &str,
        total_people: i32,
    ) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("update_invite");
        let result = sqlx::query(
            r#"
            UPDATE invites
            SET person_name = ?, village_name = ?, total_people = ?
            WHERE id = ?
            "#,
        )
        .bind(person_name)
        .bind(village_name)
        .bind(total_people)
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.record();

        // MySQL reports changed rows, so an identical update affects zero rows.
        if result?.rows_affected() > 0 {
            return Ok(true);
        }
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Delete an invite. Returns whether a row was removed.
    pub async fn delete_invite(&self, id: i64) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_invite");
        let result = sqlx::query("DELETE FROM invites WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}

#[async_trait::async_trait]
impl InviteStore for InviteRepository {
    async fn insert(
        &self,
        draft: &InviteDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Invite, StoreError> {
        let entity = self
            .create_invite(
                &draft.person_name,
                &draft.village_name,
                draft.total_people,
                created_at,
            )
            .await?;
        Ok(entity.into())
    }

    async fn list_oldest_first(&self) -> Result<Vec<Invite>, StoreError> {
        let entities = self.list_invites().await?;
        Ok(entities.into_iter().map(Invite::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invite>, StoreError> {
        Ok(InviteRepository::find_by_id(self, id).await?.map(Invite::from))
    }

    async fn update(&self, id: i64, draft: &InviteDraft) -> Result<Option<Invite>, StoreError> {
        let updated = self
            .update_invite(
                id,
                &draft.person_name,
                &draft.village_name,
                draft.total_people,
            )
            .await?;
        if !updated {
            return Ok(None);
        }
        Ok(InviteRepository::find_by_id(self, id).await?.map(Invite::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.delete_invite(id).await?)
    }
}
