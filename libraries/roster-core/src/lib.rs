//! Roster Core
//!
//! Storage-agnostic domain types, the `UserStore` trait, and error handling
//! shared by the Roster storage layer and HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserInput`, `PageRequest`, `Pagination`
//! - **Core Traits**: `UserStore`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{PageRequest, Pagination};
//!
//! // `?page=2&limit=10`
//! let request = PageRequest::parse(Some("2"), Some("10"));
//! assert_eq!(request.offset(), 10);
//!
//! let pagination = Pagination::new(&request, 15);
//! assert_eq!(pagination.page_count, 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

pub use error::{Result, RosterError};
pub use storage::UserStore;
pub use types::{PageRequest, Pagination, User, UserId, UserInput};
