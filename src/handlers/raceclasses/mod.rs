//! Race class administration handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Race class routes, relative to `/events`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{event_id}/raceclasses", get(handler::list_raceclasses))
        .route(
            "/{event_id}/raceclasses/{raceclass_id}",
            get(handler::get_raceclass)
                .put(handler::update_raceclass)
                .delete(handler::delete_raceclass),
        )
}
