//! Contestant repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::{
        error::{StoreError, StoreResult},
        store::ContestantStore,
    },
    models::{Contestant, NewContestant},
};

/// Repository for contestant database operations
pub struct ContestantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContestantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List contestants of an event, by bib where assigned
    pub async fn list(&self, event_id: &Uuid) -> StoreResult<Vec<Contestant>> {
        let contestants = sqlx::query_as::<_, Contestant>(
            r#"
            SELECT * FROM contestants
            WHERE event_id = $1
            ORDER BY bib NULLS LAST, last_name, first_name
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(contestants)
    }

    /// Find contestant by ID
    pub async fn find_by_id(&self, event_id: &Uuid, id: &Uuid) -> StoreResult<Option<Contestant>> {
        let contestant = sqlx::query_as::<_, Contestant>(
            r#"SELECT * FROM contestants WHERE event_id = $1 AND id = $2"#,
        )
        .bind(event_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(contestant)
    }

    /// Create a new contestant
    pub async fn create(&self, event_id: &Uuid, new: &NewContestant) -> StoreResult<Contestant> {
        let contestant = sqlx::query_as::<_, Contestant>(
            r#"
            INSERT INTO contestants (
                event_id, first_name, last_name, birth_date, gender, ageclass,
                region, club, team, email, distance, registration_date_time
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(new.birth_date)
        .bind(&new.gender)
        .bind(&new.ageclass)
        .bind(&new.region)
        .bind(&new.club)
        .bind(&new.team)
        .bind(&new.email)
        .bind(&new.distance)
        .bind(new.registration_date_time)
        .fetch_one(self.pool)
        .await?;

        Ok(contestant)
    }

    /// Replace a contestant's registration fields; the bib is kept
    pub async fn update(
        &self,
        event_id: &Uuid,
        id: &Uuid,
        contestant: &NewContestant,
    ) -> StoreResult<Option<Contestant>> {
        let updated = sqlx::query_as::<_, Contestant>(
            r#"
            UPDATE contestants
            SET
                first_name = $3,
                last_name = $4,
                birth_date = $5,
                gender = $6,
                ageclass = $7,
                region = $8,
                club = $9,
                team = $10,
                email = $11,
                distance = $12,
                registration_date_time = $13,
                updated_at = NOW()
            WHERE event_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(id)
        .bind(&contestant.first_name)
        .bind(&contestant.last_name)
        .bind(contestant.birth_date)
        .bind(&contestant.gender)
        .bind(&contestant.ageclass)
        .bind(&contestant.region)
        .bind(&contestant.club)
        .bind(&contestant.team)
        .bind(&contestant.email)
        .bind(&contestant.distance)
        .bind(contestant.registration_date_time)
        .fetch_optional(self.pool)
        .await?;

        Ok(updated)
    }

    /// Set a contestant's bib
    pub async fn set_bib(&self, event_id: &Uuid, id: &Uuid, bib: Option<i32>) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE contestants
            SET bib = $3, updated_at = NOW()
            WHERE event_id = $1 AND id = $2
            "#,
        )
        .bind(event_id)
        .bind(id)
        .bind(bib)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a contestant
    pub async fn delete(&self, event_id: &Uuid, id: &Uuid) -> StoreResult<bool> {
        let result = sqlx::query(r#"DELETE FROM contestants WHERE event_id = $1 AND id = $2"#)
            .bind(event_id)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ContestantStore for ContestantRepository<'_> {
    async fn list_contestants(&self, event_id: &Uuid) -> StoreResult<Vec<Contestant>> {
        self.list(event_id).await
    }

    async fn update_contestant(
        &self,
        event_id: &Uuid,
        contestant_id: &Uuid,
        contestant: &Contestant,
    ) -> StoreResult<()> {
        // The batch commands only ever change the bib
        if self.set_bib(event_id, contestant_id, contestant.bib).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}
