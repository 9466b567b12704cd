//! Event service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::EventRepository,
    error::{AppError, AppResult},
    handlers::events::request::EventRequest,
    handlers::events::response::EventResponse,
    models::NewEvent,
    utils::{sanitize_string, validate_event_name},
};

/// Event service for business logic
pub struct EventService;

impl EventService {
    /// Create a new event; names are unique
    pub async fn create_event(pool: &PgPool, payload: EventRequest) -> AppResult<EventResponse> {
        let new = Self::to_new_event(payload)?;
        let repo = EventRepository::new(pool);

        if repo.find_by_name(&new.name).await?.is_some() {
            return Err(AppError::AlreadyExists(format!("Event '{}' already exists", new.name)));
        }

        let event = repo.create(&new).await?;
        tracing::info!(event_id = %event.id, name = %event.name, "Event created");

        Ok(event.into())
    }

    /// Get event by ID
    pub async fn get_event(pool: &PgPool, id: &Uuid) -> AppResult<EventResponse> {
        let event = EventRepository::new(pool)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        Ok(event.into())
    }

    /// List all events
    pub async fn list_events(pool: &PgPool) -> AppResult<Vec<EventResponse>> {
        let events = EventRepository::new(pool).list().await?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    /// Replace an event
    pub async fn update_event(pool: &PgPool, id: &Uuid, payload: EventRequest) -> AppResult<EventResponse> {
        let new = Self::to_new_event(payload)?;
        let repo = EventRepository::new(pool);

        if let Some(existing) = repo.find_by_name(&new.name).await? {
            if existing.id != *id {
                return Err(AppError::AlreadyExists(format!("Event '{}' already exists", new.name)));
            }
        }

        let event = repo
            .update(id, &new)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        Ok(event.into())
    }

    /// Delete an event with its race classes and contestants
    pub async fn delete_event(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !EventRepository::new(pool).delete(id).await? {
            return Err(AppError::NotFound("Event not found".to_string()));
        }
        tracing::info!(event_id = %id, "Event deleted");
        Ok(())
    }

    /// Ensure the event exists
    pub async fn require_event(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        EventRepository::new(pool)
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    fn to_new_event(payload: EventRequest) -> AppResult<NewEvent> {
        let name = sanitize_string(&payload.name);
        validate_event_name(&name).map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(NewEvent {
            name,
            competition_format: payload.competition_format,
            date_of_event: payload.date_of_event,
            time_of_event: payload.time_of_event,
            organiser: payload.organiser,
            webpage: payload.webpage,
            information: payload.information,
        })
    }
}
