//! Race class handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, services::RaceclassService, state::AppState};

use super::{
    request::{RaceclassQuery, UpdateRaceclassRequest},
    response::{RaceclassResponse, RaceclassesListResponse},
};

/// List race classes of an event
pub async fn list_raceclasses(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Query(query): Query<RaceclassQuery>,
) -> AppResult<Json<RaceclassesListResponse>> {
    let raceclasses =
        RaceclassService::list_raceclasses(state.db(), &event_id, query.ageclass.as_deref()).await?;
    let total = raceclasses.len();
    Ok(Json(RaceclassesListResponse { raceclasses, total }))
}

/// Get a specific race class
pub async fn get_raceclass(
    State(state): State<AppState>,
    Path((event_id, raceclass_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<RaceclassResponse>> {
    let raceclass = RaceclassService::get_raceclass(state.db(), &event_id, &raceclass_id).await?;
    Ok(Json(raceclass))
}

/// Update a race class
pub async fn update_raceclass(
    State(state): State<AppState>,
    Path((event_id, raceclass_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateRaceclassRequest>,
) -> AppResult<Json<RaceclassResponse>> {
    payload.validate()?;
    let raceclass =
        RaceclassService::update_raceclass(state.db(), &event_id, &raceclass_id, payload).await?;
    Ok(Json(raceclass))
}

/// Delete a race class
pub async fn delete_raceclass(
    State(state): State<AppState>,
    Path((event_id, raceclass_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    RaceclassService::delete_raceclass(state.db(), &event_id, &raceclass_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
