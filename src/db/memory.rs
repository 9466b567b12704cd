//! In-memory record store
//!
//! Implements all three store traits on plain vectors behind async locks.
//! Listing preserves insertion order. Used by the command tests and handy for
//! running the commands without a database.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    db::{
        error::{StoreError, StoreResult},
        store::{ContestantStore, EventStore, RaceclassStore},
    },
    models::{Contestant, Event, NewContestant, NewEvent, NewRaceclass, Raceclass},
};

/// Record store holding events, race classes and contestants in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: RwLock<Vec<Event>>,
    raceclasses: RwLock<Vec<Raceclass>>,
    contestants: RwLock<Vec<Contestant>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event and return it
    pub async fn insert_event(&self, new: NewEvent) -> Event {
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            name: new.name,
            competition_format: new.competition_format,
            date_of_event: new.date_of_event,
            time_of_event: new.time_of_event,
            organiser: new.organiser,
            webpage: new.webpage,
            information: new.information,
            created_at: now,
            updated_at: now,
        };
        self.events.write().await.push(event.clone());
        event
    }

    /// Insert a race class directly, bypassing generation
    pub async fn insert_raceclass(&self, event_id: Uuid, new: NewRaceclass) -> Raceclass {
        let raceclass = build_raceclass(event_id, new);
        self.raceclasses.write().await.push(raceclass.clone());
        raceclass
    }

    /// Insert a contestant and return it
    pub async fn insert_contestant(&self, event_id: Uuid, new: NewContestant) -> Contestant {
        let now = Utc::now();
        let contestant = Contestant {
            id: Uuid::new_v4(),
            event_id,
            first_name: new.first_name,
            last_name: new.last_name,
            birth_date: new.birth_date,
            gender: new.gender,
            ageclass: new.ageclass,
            region: new.region,
            club: new.club,
            team: new.team,
            email: new.email,
            distance: new.distance,
            bib: None,
            registration_date_time: new.registration_date_time,
            created_at: now,
            updated_at: now,
        };
        self.contestants.write().await.push(contestant.clone());
        contestant
    }

    /// Replace a contestant's registration fields, keeping its bib
    pub async fn replace_contestant(
        &self,
        event_id: &Uuid,
        contestant_id: &Uuid,
        new: NewContestant,
    ) -> StoreResult<Contestant> {
        let mut contestants = self.contestants.write().await;
        let existing = contestants
            .iter_mut()
            .find(|c| c.event_id == *event_id && c.id == *contestant_id)
            .ok_or(StoreError::NotFound)?;

        *existing = Contestant {
            first_name: new.first_name,
            last_name: new.last_name,
            birth_date: new.birth_date,
            gender: new.gender,
            ageclass: new.ageclass,
            region: new.region,
            club: new.club,
            team: new.team,
            email: new.email,
            distance: new.distance,
            registration_date_time: new.registration_date_time,
            updated_at: Utc::now(),
            ..existing.clone()
        };
        Ok(existing.clone())
    }

    /// Remove a race class; returns whether it existed
    pub async fn remove_raceclass(&self, event_id: &Uuid, raceclass_id: &Uuid) -> bool {
        let mut raceclasses = self.raceclasses.write().await;
        let before = raceclasses.len();
        raceclasses.retain(|r| !(r.event_id == *event_id && r.id == *raceclass_id));
        raceclasses.len() != before
    }
}

fn build_raceclass(event_id: Uuid, new: NewRaceclass) -> Raceclass {
    let now = Utc::now();
    Raceclass {
        id: Uuid::new_v4(),
        event_id,
        name: new.name,
        ageclasses: new.ageclasses,
        no_of_contestants: new.no_of_contestants,
        group: new.group,
        order: new.order,
        ranking: new.ranking,
        seeding: new.seeding,
        distance: new.distance,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn get_event(&self, event_id: &Uuid) -> StoreResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == *event_id).cloned())
    }
}

#[async_trait]
impl RaceclassStore for MemoryStore {
    async fn list_raceclasses(&self, event_id: &Uuid) -> StoreResult<Vec<Raceclass>> {
        let raceclasses = self.raceclasses.read().await;
        Ok(raceclasses
            .iter()
            .filter(|r| r.event_id == *event_id)
            .cloned()
            .collect())
    }

    async fn list_raceclasses_by_ageclass(
        &self,
        event_id: &Uuid,
        ageclass: &str,
    ) -> StoreResult<Vec<Raceclass>> {
        let raceclasses = self.raceclasses.read().await;
        Ok(raceclasses
            .iter()
            .filter(|r| r.event_id == *event_id && r.contains_ageclass(ageclass))
            .cloned()
            .collect())
    }

    async fn get_raceclass(
        &self,
        event_id: &Uuid,
        raceclass_id: &Uuid,
    ) -> StoreResult<Option<Raceclass>> {
        let raceclasses = self.raceclasses.read().await;
        Ok(raceclasses
            .iter()
            .find(|r| r.event_id == *event_id && r.id == *raceclass_id)
            .cloned())
    }

    async fn create_raceclass(&self, event_id: &Uuid, raceclass: &NewRaceclass) -> StoreResult<Uuid> {
        let created = build_raceclass(*event_id, raceclass.clone());
        let id = created.id;
        self.raceclasses.write().await.push(created);
        Ok(id)
    }

    async fn update_raceclass(
        &self,
        event_id: &Uuid,
        raceclass_id: &Uuid,
        raceclass: &Raceclass,
    ) -> StoreResult<()> {
        let mut raceclasses = self.raceclasses.write().await;
        let existing = raceclasses
            .iter_mut()
            .find(|r| r.event_id == *event_id && r.id == *raceclass_id)
            .ok_or(StoreError::NotFound)?;

        *existing = Raceclass {
            id: *raceclass_id,
            event_id: *event_id,
            created_at: existing.created_at,
            updated_at: Utc::now(),
            ..raceclass.clone()
        };
        Ok(())
    }
}

#[async_trait]
impl ContestantStore for MemoryStore {
    async fn list_contestants(&self, event_id: &Uuid) -> StoreResult<Vec<Contestant>> {
        let contestants = self.contestants.read().await;
        Ok(contestants
            .iter()
            .filter(|c| c.event_id == *event_id)
            .cloned()
            .collect())
    }

    async fn update_contestant(
        &self,
        event_id: &Uuid,
        contestant_id: &Uuid,
        contestant: &Contestant,
    ) -> StoreResult<()> {
        let mut contestants = self.contestants.write().await;
        let existing = contestants
            .iter_mut()
            .find(|c| c.event_id == *event_id && c.id == *contestant_id)
            .ok_or(StoreError::NotFound)?;

        existing.bib = contestant.bib;
        existing.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_by_ageclass_is_scoped_to_event() {
        let store = MemoryStore::new();
        let event = store.insert_event(NewEvent { name: "Sprint".into(), ..Default::default() }).await;
        let other = store.insert_event(NewEvent { name: "Other".into(), ..Default::default() }).await;

        for event_id in [event.id, other.id] {
            store
                .insert_raceclass(
                    event_id,
                    NewRaceclass {
                        name: "G12".into(),
                        ageclasses: vec!["G 12 år".into()],
                        ..Default::default()
                    },
                )
                .await;
        }

        let found = store.list_raceclasses_by_ageclass(&event.id, "G 12 år").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].event_id, event.id);

        let none = store.list_raceclasses_by_ageclass(&event.id, "J 12 år").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_raceclass_is_not_found() {
        let store = MemoryStore::new();
        let event = store.insert_event(NewEvent { name: "Sprint".into(), ..Default::default() }).await;
        let rc = store.insert_raceclass(event.id, NewRaceclass::default()).await;

        let result = store.update_raceclass(&event.id, &Uuid::new_v4(), &rc).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_replace_contestant_keeps_bib() {
        let store = MemoryStore::new();
        let event = store.insert_event(NewEvent { name: "Sprint".into(), ..Default::default() }).await;
        let contestant = store
            .insert_contestant(
                event.id,
                NewContestant { ageclass: "G 12 år".into(), ..Default::default() },
            )
            .await;
        let mut numbered = contestant.clone();
        numbered.bib = Some(3);
        store.update_contestant(&event.id, &contestant.id, &numbered).await.unwrap();

        let replaced = store
            .replace_contestant(
                &event.id,
                &contestant.id,
                NewContestant {
                    ageclass: "G 12 år".into(),
                    club: Some("Lyn".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(replaced.bib, Some(3));
        assert_eq!(replaced.club.as_deref(), Some("Lyn"));
        assert_eq!(replaced.id, contestant.id);
    }

    #[tokio::test]
    async fn test_update_contestant_writes_only_bib() {
        let store = MemoryStore::new();
        let event = store.insert_event(NewEvent { name: "Sprint".into(), ..Default::default() }).await;
        let contestant = store
            .insert_contestant(
                event.id,
                NewContestant { ageclass: "G 12 år".into(), ..Default::default() },
            )
            .await;

        let mut changed = contestant.clone();
        changed.bib = Some(5);
        changed.ageclass = "J 12 år".into();
        store.update_contestant(&event.id, &contestant.id, &changed).await.unwrap();

        let stored = store.list_contestants(&event.id).await.unwrap();
        assert_eq!(stored[0].bib, Some(5));
        assert_eq!(stored[0].ageclass, "G 12 år");
    }

    #[tokio::test]
    async fn test_update_contestant_keeps_identity() {
        let store = MemoryStore::new();
        let event = store.insert_event(NewEvent { name: "Sprint".into(), ..Default::default() }).await;
        let contestant = store
            .insert_contestant(
                event.id,
                NewContestant { ageclass: "G 12 år".into(), ..Default::default() },
            )
            .await;

        let mut changed = contestant.clone();
        changed.bib = Some(7);
        changed.id = Uuid::new_v4();
        store.update_contestant(&event.id, &contestant.id, &changed).await.unwrap();

        let stored = store.list_contestants(&event.id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, contestant.id);
        assert_eq!(stored[0].bib, Some(7));
    }
}
