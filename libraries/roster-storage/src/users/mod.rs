//! Users table queries
//!
//! Each function issues exactly one statement. Ids are bound as the raw text
//! the caller received; `SQLite` integer affinity coerces numeric strings, and
//! anything else matches no row.

use roster_core::{error::Result, types::*};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Count every user
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(total)
}

/// Fetch one page of users
///
/// No `ORDER BY` is applied, so rows come back in whatever order `SQLite`
/// produces (rowid order in practice, not guaranteed).
///
/// # Errors
///
/// Fails with `RosterError::Decode` if any row on the page cannot be decoded.
pub async fn get_page(pool: &SqlitePool, page: &PageRequest) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, age FROM users LIMIT ? OFFSET ?")
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    rows.iter().map(user_from_row).collect()
}

/// Fetch a user by id
pub async fn get_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, age FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Insert a user; the returned id is the new rowid
pub async fn create(pool: &SqlitePool, input: UserInput) -> Result<User> {
    let result = sqlx::query("INSERT INTO users (name, age) VALUES (?, ?)")
        .bind(&input.name)
        .bind(input.age)
        .execute(pool)
        .await?;

    Ok(input.into_user(result.last_insert_rowid()))
}

/// Overwrite name and age
///
/// Returns the number of rows affected; 0 when no user has this id.
pub async fn update(pool: &SqlitePool, id: &str, input: &UserInput) -> Result<u64> {
    let result = sqlx::query("UPDATE users SET name = ?, age = ? WHERE id = ?")
        .bind(&input.name)
        .bind(input.age)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Delete a user
///
/// Returns the number of rows affected; 0 when no user has this id.
pub async fn delete(pool: &SqlitePool, id: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

fn user_from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
    })
}
