use crate::users;
use async_trait::async_trait;
use roster_core::{error::Result, storage::UserStore, types::*};
use sqlx::SqlitePool;

/// `UserStore` backed by a shared `SQLite` pool
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn count_users(&self) -> Result<i64> {
        users::count(&self.pool).await
    }

    async fn list_users(&self, page: &PageRequest) -> Result<Vec<User>> {
        users::get_page(&self.pool, page).await
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn create_user(&self, input: UserInput) -> Result<User> {
        users::create(&self.pool, input).await
    }

    async fn update_user(&self, id: &str, input: UserInput) -> Result<u64> {
        users::update(&self.pool, id, &input).await
    }

    async fn delete_user(&self, id: &str) -> Result<u64> {
        users::delete(&self.pool, id).await
    }
}
