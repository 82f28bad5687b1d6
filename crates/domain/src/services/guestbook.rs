//! Guestbook service.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use tracing::info;
use validator::Validate;

use crate::error::{ServiceError, StoreError};
use crate::models::{NewWish, Wish};

/// Storage for guestbook wishes.
#[async_trait::async_trait]
pub trait WishStore: Send + Sync {
    /// Persist a validated wish and return it with its assigned id.
    async fn insert(&self, wish: &NewWish, created_at: DateTime<Utc>)
        -> Result<Wish, StoreError>;

    /// All wishes, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Wish>, StoreError>;
}

/// Validates and records guestbook submissions.
#[derive(Clone)]
pub struct WishService {
    store: Arc<dyn WishStore>,
}

impl WishService {
    pub fn new(store: Arc<dyn WishStore>) -> Self {
        Self { store }
    }

    /// Create a wish. Both fields must have content after trimming.
    pub async fn create_wish(&self, name: &str, message: &str) -> Result<Wish, ServiceError> {
        let new_wish = NewWish::new(name, message);
        new_wish.validate()?;

        let wish = self.store.insert(&new_wish, created_now()).await?;
        info!(wish_id = wish.id, "Wish recorded");
        Ok(wish)
    }

    /// List wishes, newest first.
    pub async fn list_wishes(&self) -> Result<Vec<Wish>, ServiceError> {
        Ok(self.store.list_newest_first().await?)
    }
}

/// Current time at the precision a DATETIME(6) column keeps.
pub(crate) fn created_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::InMemoryWishStore;

    fn service() -> (WishService, Arc<InMemoryWishStore>) {
        let store = Arc::new(InMemoryWishStore::new());
        (WishService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_created_wish_is_listed_first() {
        let (service, _) = service();

        service.create_wish("Ali", "Mubarak ho!").await.unwrap();
        let latest = service.create_wish("Sara", "Best wishes").await.unwrap();

        let wishes = service.list_wishes().await.unwrap();
        assert_eq!(wishes.len(), 2);
        assert_eq!(wishes[0], latest);
        assert_eq!(wishes[1].name, "Ali");
    }

    #[tokio::test]
    async fn test_stored_fields_are_trimmed() {
        let (service, _) = service();

        let wish = service.create_wish("  Ali ", " Congrats \n").await.unwrap();
        assert_eq!(wish.name, "Ali");
        assert_eq!(wish.message, "Congrats");
    }

    #[tokio::test]
    async fn test_blank_submission_is_rejected_without_write() {
        let (service, store) = service();

        for (name, message) in [("", "hello"), ("Ali", "   "), ("\t", "\n")] {
            let result = service.create_wish(name, message).await;
            assert!(
                matches!(result, Err(ServiceError::Validation(_))),
                "Expected validation error for ({:?}, {:?})",
                name,
                message
            );
        }

        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_overlong_name_is_rejected() {
        let (service, store) = service();

        let result = service.create_wish(&"n".repeat(101), "hello").await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert_eq!(store.len(), 0);
    }
}
