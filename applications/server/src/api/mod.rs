/// API route modules
pub mod health;
pub mod response;
pub mod users;
