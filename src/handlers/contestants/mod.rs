//! Contestant management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Contestant routes, relative to `/events`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{event_id}/contestants",
            get(handler::list_contestants).post(handler::create_contestant),
        )
        .route(
            "/{event_id}/contestants/{contestant_id}",
            get(handler::get_contestant)
                .put(handler::update_contestant)
                .delete(handler::delete_contestant),
        )
}
