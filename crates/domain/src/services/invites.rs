//! Invite admin service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use validator::Validate;

use crate::error::{ServiceError, StoreError};
use crate::models::{Invite, InviteDraft};
use crate::services::export::invites_to_csv;
use crate::services::guestbook::created_now;

/// Storage for invites.
#[async_trait::async_trait]
pub trait InviteStore: Send + Sync {
    /// Persist a validated draft and return it with its assigned id.
    async fn insert(
        &self,
        draft: &InviteDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Invite, StoreError>;

    /// All invites, oldest first.
    async fn list_oldest_first(&self) -> Result<Vec<Invite>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Invite>, StoreError>;

    /// Replace the mutable fields. Returns `None` when the id does not exist.
    async fn update(&self, id: i64, draft: &InviteDraft) -> Result<Option<Invite>, StoreError>;

    /// Delete by id. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Invite {} not found", id))
}

/// Validates and manages invites.
#[derive(Clone)]
pub struct InviteService {
    store: Arc<dyn InviteStore>,
}

impl InviteService {
    pub fn new(store: Arc<dyn InviteStore>) -> Self {
        Self { store }
    }

    /// Create an invite. A non-numeric `total` is stored as 1.
    pub async fn create_invite(
        &self,
        person: &str,
        village: &str,
        total: Option<&str>,
    ) -> Result<Invite, ServiceError> {
        let draft = InviteDraft::for_create(person, village, total);
        draft.validate()?;

        let invite = self.store.insert(&draft, created_now()).await?;
        info!(
            invite_id = invite.id,
            total_people = invite.total_people,
            "Invite created"
        );
        Ok(invite)
    }

    /// List invites, oldest first.
    pub async fn list_invites(&self) -> Result<Vec<Invite>, ServiceError> {
        Ok(self.store.list_oldest_first().await?)
    }

    pub async fn get_invite(&self, id: i64) -> Result<Invite, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Update an invite. Omitted fields keep their current value and a
    /// non-numeric `total` keeps the current headcount.
    pub async fn update_invite(
        &self,
        id: i64,
        person: Option<&str>,
        village: Option<&str>,
        total: Option<&str>,
    ) -> Result<Invite, ServiceError> {
        let current = self.get_invite(id).await?;

        let draft = InviteDraft::for_update(&current, person, village, total);
        draft.validate()?;

        let invite = self
            .store
            .update(id, &draft)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!(invite_id = id, "Invite updated");
        Ok(invite)
    }

    pub async fn delete_invite(&self, id: i64) -> Result<(), ServiceError> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }

        info!(invite_id = id, "Invite deleted");
        Ok(())
    }

    /// Serialize every invite, oldest first, as a CSV document.
    pub async fn export_csv(&self) -> Result<Vec<u8>, ServiceError> {
        let invites = self.list_invites().await?;
        info!(rows = invites.len(), "Exporting invites as CSV");
        Ok(invites_to_csv(&invites).into_bytes())
    }
}
