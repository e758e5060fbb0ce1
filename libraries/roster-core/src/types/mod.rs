//! Domain types
mod pagination;
mod user;

pub use pagination::{PageRequest, Pagination, DEFAULT_LIMIT};
pub use user::{User, UserId, UserInput};
