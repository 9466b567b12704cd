//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod commands;
pub mod contestants;
pub mod events;
pub mod health;
pub mod raceclasses;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new().merge(health::routes()).nest(
        "/events",
        events::routes()
            .merge(raceclasses::routes())
            .merge(contestants::routes())
            .merge(commands::routes()),
    )
}
