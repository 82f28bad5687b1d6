//! In-memory stores for development and testing.
//!
//! Ids come from a counter that only moves forward, matching AUTO_INCREMENT.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::models::{Invite, InviteDraft, NewWish, Wish};
use crate::services::guestbook::WishStore;
use crate::services::invites::InviteStore;

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn lock<T>(table: &Mutex<Table<T>>) -> Result<MutexGuard<'_, Table<T>>, StoreError> {
    table
        .lock()
        .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
}

/// Wish store backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryWishStore {
    table: Mutex<Table<Wish>>,
}

impl InMemoryWishStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored wishes.
    pub fn len(&self) -> usize {
        lock(&self.table).map(|t| t.rows.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl WishStore for InMemoryWishStore {
    async fn insert(
        &self,
        wish: &NewWish,
        created_at: DateTime<Utc>,
    ) -> Result<Wish, StoreError> {
        let mut table = lock(&self.table)?;
        let wish = Wish {
            id: table.allocate_id(),
            name: wish.name.clone(),
            message: wish.message.clone(),
            created_at,
        };
        table.rows.push(wish.clone());
        Ok(wish)
    }

    async fn list_newest_first(&self) -> Result<Vec<Wish>, StoreError> {
        let mut rows = lock(&self.table)?.rows.clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }
}

/// Invite store backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryInviteStore {
    table: Mutex<Table<Invite>>,
}

impl InMemoryInviteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored invites.
    pub fn len(&self) -> usize {
        lock(&self.table).map(|t| t.rows.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl InviteStore for InMemoryInviteStore {
    async fn insert(
        &self,
        draft: &InviteDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Invite, StoreError> {
        let mut table = lock(&self.table)?;
        let invite = Invite {
            id: table.allocate_id(),
            person_name: draft.person_name.clone(),
            village_name: draft.village_name.clone(),
            total_people: draft.total_people,
            created_at,
        };
        table.rows.push(invite.clone());
        Ok(invite)
    }

    async fn list_oldest_first(&self) -> Result<Vec<Invite>, StoreError> {
        let mut rows = lock(&self.table)?.rows.clone();
        rows.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invite>, StoreError> {
        Ok(lock(&self.table)?.rows.iter().find(|i| i.id == id).cloned())
    }

    async fn update(&self, id: i64, draft: &InviteDraft) -> Result<Option<Invite>, StoreError> {
        let mut table = lock(&self.table)?;
        let Some(invite) = table.rows.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };

        invite.person_name = draft.person_name.clone();
        invite.village_name = draft.village_name.clone();
        invite.total_people = draft.total_people;
        Ok(Some(invite.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut table = lock(&self.table)?;
        let before = table.rows.len();
        table.rows.retain(|i| i.id != id);
        Ok(table.rows.len() != before)
    }
}
