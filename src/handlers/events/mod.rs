//! Event management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Event routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_events).post(handler::create_event))
        .route(
            "/{event_id}",
            get(handler::get_event)
                .put(handler::update_event)
                .delete(handler::delete_event),
        )
}
