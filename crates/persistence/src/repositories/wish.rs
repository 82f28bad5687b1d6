//! Wish repository for database operations.

use chrono::{DateTime, Utc};
use domain::models::{NewWish, Wish};
use domain::services::WishStore;
use domain::StoreError;
use sqlx::MySqlPool;

use crate::entities::WishEntity;
use crate::query_timer::QueryTimer;

/// Repository for guestbook wishes.
#[derive(Clone)]
pub struct WishRepository {
    pool: MySqlPool,
}

impl WishRepository {
    /// Creates a new WishRepository with the given connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a wish and read it back by its generated id.
    pub async fn create_wish(
        &self,
        name: &str,
        message: &str,
        created_at: DateTime<Utc>,
    ) -> Result<WishEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_wish");
        let inserted = sqlx::query(
            r#"
            INSERT INTO wishes (name, message, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(message)
        .bind(created_at.naive_utc())
        .execute(&self.pool)
        .await;
        timer.record();

        let id = inserted?.last_insert_id();
        let timer = QueryTimer::new("find_wish_by_id");
        let result = sqlx::query_as::<_, WishEntity>(
            r#"
            SELECT id, name, message, created_at
            FROM wishes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all wishes, newest first. Ties on `created_at` go to the higher id.
    pub async fn list_wishes(&self) -> Result<Vec<WishEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_wishes");
        let result = sqlx::query_as::<_, WishEntity>(
            r#"
            SELECT id, name, message, created_at
            FROM wishes
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait::async_trait]
impl WishStore for WishRepository {
    async fn insert(&self, wish: &NewWish, created_at: DateTime<Utc>) -> Result<Wish, StoreError> {
        let entity = self
            .create_wish(&wish.name, &wish.message, created_at)
            .await?;
        Ok(entity.into())
    }

    async fn list_newest_first(&self) -> Result<Vec<Wish>, StoreError> {
        let entities = self.list_wishes().await?;
        Ok(entities.into_iter().map(Wish::from).collect())
    }
}
