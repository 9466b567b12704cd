//! Command handler implementations
//!
//! Both commands hold the event's lock for their whole run, so two commands
//! against one event never interleave within this process.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{error::AppResult, services::CommandService, state::AppState};

use super::response::{AssignBibsResponse, GenerateRaceclassesResponse};

/// Generate race classes from the event's contestants
pub async fn generate_raceclasses(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> AppResult<Json<GenerateRaceclassesResponse>> {
    let _guard = state.event_locks().acquire(event_id).await;
    let outcome = CommandService::generate_raceclasses(state.db(), &event_id).await?;
    Ok(Json(GenerateRaceclassesResponse { event_id, outcome }))
}

/// Assign bibs to the event's contestants
pub async fn assign_bibs(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> AppResult<Json<AssignBibsResponse>> {
    let _guard = state.event_locks().acquire(event_id).await;
    let outcome =
        CommandService::assign_bibs(state.db(), &state.config().commands, &event_id).await?;
    Ok(Json(AssignBibsResponse { event_id, outcome }))
}
