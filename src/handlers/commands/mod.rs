//! Batch command handlers

mod handler;
pub mod response;

pub use handler::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Command routes, relative to `/events`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{event_id}/generate-raceclasses",
            post(handler::generate_raceclasses),
        )
        .route(
            "/{event_id}/contestants/assign-bibs",
            post(handler::assign_bibs),
        )
}
