//! Raceclass repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::{
        error::{StoreError, StoreResult},
        store::RaceclassStore,
    },
    models::{NewRaceclass, Raceclass},
};

/// Repository for race class database operations
pub struct RaceclassRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceclassRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List race classes of an event in presentation order
    pub async fn list(&self, event_id: &Uuid) -> StoreResult<Vec<Raceclass>> {
        let raceclasses = sqlx::query_as::<_, Raceclass>(
            r#"
            SELECT * FROM raceclasses
            WHERE event_id = $1
            ORDER BY "group" NULLS LAST, "order" NULLS LAST, created_at
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(raceclasses)
    }

    /// List race classes of an event that contain the given ageclass
    pub async fn list_by_ageclass(&self, event_id: &Uuid, ageclass: &str) -> StoreResult<Vec<Raceclass>> {
        let raceclasses = sqlx::query_as::<_, Raceclass>(
            r#"
            SELECT * FROM raceclasses
            WHERE event_id = $1 AND $2 = ANY(ageclasses)
            ORDER BY created_at
            "#,
        )
        .bind(event_id)
        .bind(ageclass)
        .fetch_all(self.pool)
        .await?;

        Ok(raceclasses)
    }

    /// Find race class by ID
    pub async fn find_by_id(&self, event_id: &Uuid, id: &Uuid) -> StoreResult<Option<Raceclass>> {
        let raceclass = sqlx::query_as::<_, Raceclass>(
            r#"SELECT * FROM raceclasses WHERE event_id = $1 AND id = $2"#,
        )
        .bind(event_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(raceclass)
    }

    /// Create a new race class
    pub async fn create(&self, event_id: &Uuid, new: &NewRaceclass) -> StoreResult<Raceclass> {
        let raceclass = sqlx::query_as::<_, Raceclass>(
            r#"
            INSERT INTO raceclasses (
                event_id, name, ageclasses, no_of_contestants, "group", "order",
                ranking, seeding, distance
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(&new.name)
        .bind(&new.ageclasses)
        .bind(new.no_of_contestants)
        .bind(new.group)
        .bind(new.order)
        .bind(new.ranking)
        .bind(new.seeding)
        .bind(&new.distance)
        .fetch_one(self.pool)
        .await?;

        Ok(raceclass)
    }

    /// Replace a race class's mutable fields
    pub async fn update(
        &self,
        event_id: &Uuid,
        id: &Uuid,
        raceclass: &Raceclass,
    ) -> StoreResult<Option<Raceclass>> {
        let updated = sqlx::query_as::<_, Raceclass>(
            r#"
            UPDATE raceclasses
            SET
                name = $3,
                ageclasses = $4,
                no_of_contestants = $5,
                "group" = $6,
                "order" = $7,
                ranking = $8,
                seeding = $9,
                distance = $10,
                updated_at = NOW()
            WHERE event_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(id)
        .bind(&raceclass.name)
        .bind(&raceclass.ageclasses)
        .bind(raceclass.no_of_contestants)
        .bind(raceclass.group)
        .bind(raceclass.order)
        .bind(raceclass.ranking)
        .bind(raceclass.seeding)
        .bind(&raceclass.distance)
        .fetch_optional(self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a race class
    pub async fn delete(&self, event_id: &Uuid, id: &Uuid) -> StoreResult<bool> {
        let result = sqlx::query(r#"DELETE FROM raceclasses WHERE event_id = $1 AND id = $2"#)
            .bind(event_id)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl RaceclassStore for RaceclassRepository<'_> {
    async fn list_raceclasses(&self, event_id: &Uuid) -> StoreResult<Vec<Raceclass>> {
        self.list(event_id).await
    }

    async fn list_raceclasses_by_ageclass(
        &self,
        event_id: &Uuid,
        ageclass: &str,
    ) -> StoreResult<Vec<Raceclass>> {
        self.list_by_ageclass(event_id, ageclass).await
    }

    async fn get_raceclass(
        &self,
        event_id: &Uuid,
        raceclass_id: &Uuid,
    ) -> StoreResult<Option<Raceclass>> {
        self.find_by_id(event_id, raceclass_id).await
    }

    async fn create_raceclass(&self, event_id: &Uuid, raceclass: &NewRaceclass) -> StoreResult<Uuid> {
        Ok(self.create(event_id, raceclass).await?.id)
    }

    async fn update_raceclass(
        &self,
        event_id: &Uuid,
        raceclass_id: &Uuid,
        raceclass: &Raceclass,
    ) -> StoreResult<()> {
        self.update(event_id, raceclass_id, raceclass)
            .await?
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
