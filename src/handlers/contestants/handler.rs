//! Contestant handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, services::ContestantService, state::AppState};

use super::{
    request::ContestantRequest,
    response::{ContestantResponse, ContestantsListResponse},
};

/// List contestants of an event
pub async fn list_contestants(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> AppResult<Json<ContestantsListResponse>> {
    let contestants = ContestantService::list_contestants(state.db(), &event_id).await?;
    let total = contestants.len();
    Ok(Json(ContestantsListResponse { contestants, total }))
}

/// Register a contestant
pub async fn create_contestant(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<ContestantRequest>,
) -> AppResult<(StatusCode, Json<ContestantResponse>)> {
    payload.validate()?;
    let contestant = ContestantService::create_contestant(state.db(), &event_id, payload).await?;
    Ok((StatusCode::CREATED, Json(contestant)))
}

/// Get a specific contestant
pub async fn get_contestant(
    State(state): State<AppState>,
    Path((event_id, contestant_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ContestantResponse>> {
    let contestant = ContestantService::get_contestant(state.db(), &event_id, &contestant_id).await?;
    Ok(Json(contestant))
}

/// Replace a contestant
pub async fn update_contestant(
    State(state): State<AppState>,
    Path((event_id, contestant_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ContestantRequest>,
) -> AppResult<Json<ContestantResponse>> {
    payload.validate()?;
    let contestant =
        ContestantService::update_contestant(state.db(), &event_id, &contestant_id, payload).await?;
    Ok(Json(contestant))
}

/// Delete a contestant
pub async fn delete_contestant(
    State(state): State<AppState>,
    Path((event_id, contestant_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    ContestantService::delete_contestant(state.db(), &event_id, &contestant_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
