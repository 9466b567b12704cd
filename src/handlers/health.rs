//! Health check handlers

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::{db, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// Health check endpoint; reports unavailable when the database is unreachable
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, code, database) = match db::ping(state.db()).await {
        Ok(()) => ("healthy", StatusCode::OK, "up"),
        Err(e) => {
            tracing::warn!("Health check database ping failed: {}", e);
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, "down")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
