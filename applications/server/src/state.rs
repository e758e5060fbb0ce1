/// Shared application state
use crate::config::ErrorMode;
use roster_core::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub error_mode: ErrorMode,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, error_mode: ErrorMode) -> Self {
        Self { store, error_mode }
    }
}
