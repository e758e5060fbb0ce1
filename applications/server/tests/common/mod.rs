//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use roster_core::{PageRequest, RosterError, User, UserInput, UserStore};
use roster_server::{create_router, AppState, ErrorMode};
use roster_storage::SqliteUserStore;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router backed by a real SQLite file that lives as long as this value
pub struct TestApp {
    pub router: Router,
    pub store: SqliteUserStore,
    _temp_dir: TempDir,
}

/// Create a test app over a fresh database file
pub async fn create_test_app(error_mode: ErrorMode) -> Result<TestApp> {
    let temp_dir = TempDir::new()?;
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = roster_storage::create_pool(&db_url, 5).await?;
    roster_storage::ensure_schema(&pool).await?;
    let store = SqliteUserStore::new(pool);

    let router = create_router(AppState::new(Arc::new(store.clone()), error_mode));

    Ok(TestApp {
        router,
        store,
        _temp_dir: temp_dir,
    })
}

/// Build a router over any store
pub fn router_with_store(store: impl UserStore + 'static, error_mode: ErrorMode) -> Router {
    create_router(AppState::new(Arc::new(store), error_mode))
}

/// Send a request and return status plus raw body bytes
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes.to_vec())
}

/// Send a request and parse the body as JSON
pub async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(router, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Insert `count` users named `user-1..=count` directly through storage
pub async fn seed_users(store: &SqliteUserStore, count: i64) {
    for n in 1..=count {
        store
            .create_user(UserInput::new(format!("user-{n}"), 20 + n))
            .await
            .unwrap();
    }
}

/// Write a row whose `age` is text, so reading it fails to decode
pub async fn insert_undecodable_user(store: &SqliteUserStore) {
    sqlx::query("INSERT INTO users (name, age) VALUES ('Broken', 'not a number')")
        .execute(store.pool())
        .await
        .unwrap();
}

/// Store whose every call fails with a database error
pub struct FailingStore;

fn unavailable() -> RosterError {
    RosterError::database("disk I/O error")
}

#[async_trait]
impl UserStore for FailingStore {
    async fn count_users(&self) -> roster_core::Result<i64> {
        Err(unavailable())
    }

    async fn list_users(&self, _page: &PageRequest) -> roster_core::Result<Vec<User>> {
        Err(unavailable())
    }

    async fn get_user(&self, _id: &str) -> roster_core::Result<Option<User>> {
        Err(unavailable())
    }

    async fn create_user(&self, _input: UserInput) -> roster_core::Result<User> {
        Err(unavailable())
    }

    async fn update_user(&self, _id: &str, _input: UserInput) -> roster_core::Result<u64> {
        Err(unavailable())
    }

    async fn delete_user(&self, _id: &str) -> roster_core::Result<u64> {
        Err(unavailable())
    }
}

/// Real store whose `count_users` always fails
pub struct CountFailingStore {
    pub inner: SqliteUserStore,
}

#[async_trait]
impl UserStore for CountFailingStore {
    async fn count_users(&self) -> roster_core::Result<i64> {
        Err(unavailable())
    }

    async fn list_users(&self, page: &PageRequest) -> roster_core::Result<Vec<User>> {
        self.inner.list_users(page).await
    }

    async fn get_user(&self, id: &str) -> roster_core::Result<Option<User>> {
        self.inner.get_user(id).await
    }

    async fn create_user(&self, input: UserInput) -> roster_core::Result<User> {
        self.inner.create_user(input).await
    }

    async fn update_user(&self, id: &str, input: UserInput) -> roster_core::Result<u64> {
        self.inner.update_user(id, input).await
    }

    async fn delete_user(&self, id: &str) -> roster_core::Result<u64> {
        self.inner.delete_user(id).await
    }
}
