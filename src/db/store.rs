//! Record store interfaces consumed by the batch commands
//!
//! Each call is treated as an atomic single-record action. The commands only
//! ever talk to these traits, so a Postgres repository, the in-memory store or
//! a mock can be substituted freely.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::error::StoreResult,
    models::{Contestant, Event, NewRaceclass, Raceclass},
};

/// Event lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn get_event(&self, event_id: &Uuid) -> StoreResult<Option<Event>>;
}

/// Race class reads and writes scoped to one event
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RaceclassStore: Send + Sync {
    async fn list_raceclasses(&self, event_id: &Uuid) -> StoreResult<Vec<Raceclass>>;

    /// Race classes of the event whose ageclass set contains `ageclass`
    async fn list_raceclasses_by_ageclass(
        &self,
        event_id: &Uuid,
        ageclass: &str,
    ) -> StoreResult<Vec<Raceclass>>;

    async fn get_raceclass(
        &self,
        event_id: &Uuid,
        raceclass_id: &Uuid,
    ) -> StoreResult<Option<Raceclass>>;

    /// Returns the id of the created race class
    async fn create_raceclass(&self, event_id: &Uuid, raceclass: &NewRaceclass) -> StoreResult<Uuid>;

    async fn update_raceclass(
        &self,
        event_id: &Uuid,
        raceclass_id: &Uuid,
        raceclass: &Raceclass,
    ) -> StoreResult<()>;
}

/// Contestant reads and writes scoped to one event
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContestantStore: Send + Sync {
    async fn list_contestants(&self, event_id: &Uuid) -> StoreResult<Vec<Contestant>>;

    /// Persist a contestant changed by bib assignment; only the bib is written
    async fn update_contestant(
        &self,
        event_id: &Uuid,
        contestant_id: &Uuid,
        contestant: &Contestant,
    ) -> StoreResult<()>;
}
