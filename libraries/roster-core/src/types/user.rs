/// User domain type
use serde::{Deserialize, Serialize};

/// Storage-assigned user identifier (SQLite rowid)
pub type UserId = i64;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by storage on insert
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Age in years (no range is enforced)
    pub age: i64,
}

/// Writable fields of a user, as accepted by create and update
///
/// Any `id` present in the request body is ignored. Missing fields take
/// their zero value rather than failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Age in years
    #[serde(default)]
    pub age: i64,
}

impl UserInput {
    /// Create input from name and age
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Attach a storage-assigned id
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
        }
    }
}
