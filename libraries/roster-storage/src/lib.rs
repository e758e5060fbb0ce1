//! Roster Storage
//!
//! `SQLite` persistence for the Roster users table.
//!
//! # Architecture
//!
//! - **One table**: `users(id, name, age)`, created idempotently at startup
//! - **Vertical slice**: the `users` module owns every query
//! - **One statement per call**: no multi-statement transactions
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::{PageRequest, UserStore};
//! use roster_storage::{create_pool, ensure_schema, SqliteUserStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://database.db", 5).await?;
//! ensure_schema(&pool).await?;
//!
//! let store = SqliteUserStore::new(pool);
//! let users = store.list_users(&PageRequest::default()).await?;
//! # Ok(())
//! # }
//! ```

mod context;

pub mod users;

pub use context::SqliteUserStore;

use roster_core::{Result, RosterError};
use sqlx::sqlite::SqlitePool;

/// Idempotent DDL for the users table
const USERS_SCHEMA: &str = include_str!("../schema/users.sql");

/// Create the users table if it does not exist
///
/// Safe to call on every start; an existing table is left untouched.
///
/// # Errors
///
/// Returns [`RosterError::Schema`] if the statement fails
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(USERS_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| RosterError::Schema(e.to_string()))?;

    tracing::info!("users table ready");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://database.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "SQLite pool created");

    Ok(pool)
}
