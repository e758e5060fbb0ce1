//! Storage trait for the users table

use crate::error::Result;
use crate::types::{PageRequest, User, UserInput};
use async_trait::async_trait;

/// Storage handle used by request handlers
///
/// Every method issues exactly one statement. Identifiers arrive as the raw
/// path segment and are bound without numeric validation; an id that matches
/// no row behaves like any other missing row.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Count every row in the table
    async fn count_users(&self) -> Result<i64>;

    /// Fetch one page of users in storage order
    ///
    /// A row that cannot be decoded fails the whole page with
    /// [`RosterError::Decode`](crate::RosterError::Decode).
    async fn list_users(&self, page: &PageRequest) -> Result<Vec<User>>;

    /// Fetch a single user, `None` when no row matches
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Insert a user and return it with its assigned id
    async fn create_user(&self, input: UserInput) -> Result<User>;

    /// Overwrite name and age, returning the number of rows affected
    async fn update_user(&self, id: &str, input: UserInput) -> Result<u64>;

    /// Delete a user, returning the number of rows affected
    async fn delete_user(&self, id: &str) -> Result<u64>;
}
