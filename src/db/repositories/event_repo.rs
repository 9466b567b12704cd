//! Event repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::{error::StoreResult, store::EventStore},
    models::{Event, NewEvent},
};

/// Repository for event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, new: &NewEvent) -> StoreResult<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                name, competition_format, date_of_event, time_of_event,
                organiser, webpage, information
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.competition_format)
        .bind(new.date_of_event)
        .bind(new.time_of_event)
        .bind(&new.organiser)
        .bind(&new.webpage)
        .bind(&new.information)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: &Uuid) -> StoreResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE id = $1"#)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(event)
    }

    /// Find event by name
    pub async fn find_by_name(&self, name: &str) -> StoreResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE name = $1"#)
            .bind(name)
            .fetch_optional(self.pool)
            .await?;

        Ok(event)
    }

    /// List all events, upcoming first
    pub async fn list(&self) -> StoreResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT * FROM events
            ORDER BY date_of_event NULLS LAST, time_of_event NULLS LAST, created_at
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Replace an event's fields
    pub async fn update(&self, id: &Uuid, new: &NewEvent) -> StoreResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET
                name = $2,
                competition_format = $3,
                date_of_event = $4,
                time_of_event = $5,
                organiser = $6,
                webpage = $7,
                information = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&new.name)
        .bind(&new.competition_format)
        .bind(new.date_of_event)
        .bind(new.time_of_event)
        .bind(&new.organiser)
        .bind(&new.webpage)
        .bind(&new.information)
        .fetch_optional(self.pool)
        .await?;

        Ok(event)
    }

    /// Delete an event together with its race classes and contestants
    pub async fn delete(&self, id: &Uuid) -> StoreResult<bool> {
        let result = sqlx::query(r#"DELETE FROM events WHERE id = $1"#)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl EventStore for EventRepository<'_> {
    async fn get_event(&self, event_id: &Uuid) -> StoreResult<Option<Event>> {
        self.find_by_id(event_id).await
    }
}
