//! Race class service
//!
//! Plain administration of race classes. Merging ageclasses into one race
//! class is done by updating its `ageclasses`; generation later counts all of
//! them into that class.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::RaceclassRepository,
    error::{AppError, AppResult},
    handlers::raceclasses::{request::UpdateRaceclassRequest, response::RaceclassResponse},
    services::EventService,
    utils::{validate_ageclasses, validation::{validate_position, validate_raceclass_name}},
};

/// Race class service for business logic
pub struct RaceclassService;

impl RaceclassService {
    /// List race classes of an event, optionally only those containing an ageclass
    pub async fn list_raceclasses(
        pool: &PgPool,
        event_id: &Uuid,
        ageclass: Option<&str>,
    ) -> AppResult<Vec<RaceclassResponse>> {
        EventService::require_event(pool, event_id).await?;
        let repo = RaceclassRepository::new(pool);

        let raceclasses = match ageclass {
            Some(ageclass) => repo.list_by_ageclass(event_id, ageclass).await?,
            None => repo.list(event_id).await?,
        };

        Ok(raceclasses.into_iter().map(Into::into).collect())
    }

    /// Get race class by ID
    pub async fn get_raceclass(pool: &PgPool, event_id: &Uuid, id: &Uuid) -> AppResult<RaceclassResponse> {
        let raceclass = RaceclassRepository::new(pool)
            .find_by_id(event_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Race class not found".to_string()))?;

        Ok(raceclass.into())
    }

    /// Update a race class
    pub async fn update_raceclass(
        pool: &PgPool,
        event_id: &Uuid,
        id: &Uuid,
        payload: UpdateRaceclassRequest,
    ) -> AppResult<RaceclassResponse> {
        validate_raceclass_name(&payload.name).map_err(|e| AppError::Validation(e.to_string()))?;
        validate_ageclasses(&payload.ageclasses).map_err(|e| AppError::Validation(e.to_string()))?;
        validate_position(payload.group).map_err(|e| AppError::Validation(e.to_string()))?;
        validate_position(payload.order).map_err(|e| AppError::Validation(e.to_string()))?;

        let repo = RaceclassRepository::new(pool);
        let mut raceclass = repo
            .find_by_id(event_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Race class not found".to_string()))?;

        raceclass.name = payload.name;
        raceclass.ageclasses = payload.ageclasses;
        raceclass.group = payload.group;
        raceclass.order = payload.order;
        raceclass.ranking = payload.ranking;
        raceclass.seeding = payload.seeding;
        raceclass.distance = payload.distance;
        if let Some(count) = payload.no_of_contestants {
            raceclass.no_of_contestants = count;
        }

        let updated = repo
            .update(event_id, id, &raceclass)
            .await?
            .ok_or_else(|| AppError::NotFound("Race class not found".to_string()))?;

        Ok(updated.into())
    }

    /// Delete a race class
    pub async fn delete_raceclass(pool: &PgPool, event_id: &Uuid, id: &Uuid) -> AppResult<()> {
        if !RaceclassRepository::new(pool).delete(event_id, id).await? {
            return Err(AppError::NotFound("Race class not found".to_string()));
        }
        Ok(())
    }
}
