//! Service banner and health reporting.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health report returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
    pub version: &'static str,
}

pub async fn root() -> &'static str {
    "User API Server"
}

/// Reports the active store backend and crate version. Connectivity
/// problems surface as 500s on the user routes, not here.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend: state.backend.as_str(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
