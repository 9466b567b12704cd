//! Event handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, services::EventService, state::AppState};

use super::{
    request::EventRequest,
    response::{EventResponse, EventsListResponse},
};

/// List all events
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<EventsListResponse>> {
    let events = EventService::list_events(state.db()).await?;
    let total = events.len();
    Ok(Json(EventsListResponse { events, total }))
}

/// Create a new event
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventRequest>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    payload.validate()?;
    let event = EventService::create_event(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Get a specific event
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> AppResult<Json<EventResponse>> {
    let event = EventService::get_event(state.db(), &event_id).await?;
    Ok(Json(event))
}

/// Replace an event
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<EventRequest>,
) -> AppResult<Json<EventResponse>> {
    payload.validate()?;
    let event = EventService::update_event(state.db(), &event_id, payload).await?;
    Ok(Json(event))
}

/// Delete an event
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    EventService::delete_event(state.db(), &event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
