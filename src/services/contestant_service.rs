//! Contestant service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::ContestantRepository,
    error::{AppError, AppResult},
    handlers::contestants::{request::ContestantRequest, response::ContestantResponse},
    models::NewContestant,
    services::EventService,
    utils::{sanitize_string, validate_ageclass},
};

/// Contestant service for business logic
pub struct ContestantService;

impl ContestantService {
    /// List contestants of an event
    pub async fn list_contestants(pool: &PgPool, event_id: &Uuid) -> AppResult<Vec<ContestantResponse>> {
        EventService::require_event(pool, event_id).await?;
        let contestants = ContestantRepository::new(pool).list(event_id).await?;
        Ok(contestants.into_iter().map(Into::into).collect())
    }

    /// Register a contestant in an event
    pub async fn create_contestant(
        pool: &PgPool,
        event_id: &Uuid,
        payload: ContestantRequest,
    ) -> AppResult<ContestantResponse> {
        EventService::require_event(pool, event_id).await?;
        let new = Self::to_new_contestant(payload)?;

        let contestant = ContestantRepository::new(pool).create(event_id, &new).await?;
        tracing::debug!(event_id = %event_id, contestant_id = %contestant.id, "Contestant created");

        Ok(contestant.into())
    }

    /// Get contestant by ID
    pub async fn get_contestant(pool: &PgPool, event_id: &Uuid, id: &Uuid) -> AppResult<ContestantResponse> {
        let contestant = ContestantRepository::new(pool)
            .find_by_id(event_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contestant not found".to_string()))?;

        Ok(contestant.into())
    }

    /// Replace a contestant
    pub async fn update_contestant(
        pool: &PgPool,
        event_id: &Uuid,
        id: &Uuid,
        payload: ContestantRequest,
    ) -> AppResult<ContestantResponse> {
        EventService::require_event(pool, event_id).await?;
        let new = Self::to_new_contestant(payload)?;

        let contestant = ContestantRepository::new(pool)
            .update(event_id, id, &new)
            .await?
            .ok_or_else(|| AppError::NotFound("Contestant not found".to_string()))?;

        Ok(contestant.into())
    }

    /// Delete a contestant
    pub async fn delete_contestant(pool: &PgPool, event_id: &Uuid, id: &Uuid) -> AppResult<()> {
        if !ContestantRepository::new(pool).delete(event_id, id).await? {
            return Err(AppError::NotFound("Contestant not found".to_string()));
        }
        Ok(())
    }

    fn to_new_contestant(payload: ContestantRequest) -> AppResult<NewContestant> {
        let ageclass = sanitize_string(&payload.ageclass);
        validate_ageclass(&ageclass).map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(NewContestant {
            first_name: sanitize_string(&payload.first_name),
            last_name: sanitize_string(&payload.last_name),
            birth_date: payload.birth_date,
            gender: payload.gender,
            ageclass,
            region: payload.region,
            club: payload.club,
            team: payload.team,
            email: payload.email,
            distance: payload.distance,
            registration_date_time: payload.registration_date_time,
        })
    }
}
