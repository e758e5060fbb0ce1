//! Roster Server Library
//!
//! JSON CRUD service for the users table.
//!
//! This library exposes the router and its building blocks for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{ErrorMode, ServerConfig};
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use state::AppState;
