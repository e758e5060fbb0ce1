/// Liveness probe
use crate::{config::ErrorMode, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub error_mode: ErrorMode,
}

/// GET /health
///
/// Does not touch storage, so it stays green while the database is unavailable.
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        error_mode: app_state.error_mode,
    })
}
