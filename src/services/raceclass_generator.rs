//! Race class generation
//!
//! Derives the race classes of an event from its contestants' ageclasses and
//! then gives every race class of the event a presentation position.
//!
//! Writes are issued one record at a time with no transactional envelope: if
//! a write fails, race classes created or updated earlier in the same run stay
//! as they are and the run aborts.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    constants::{
        FIRST_RACECLASS_ORDER, GENERATED_RACECLASS_GROUP, NEW_RACECLASS_RANKING,
        NEW_RACECLASS_SEEDING,
    },
    db::{ContestantStore, EventStore, RaceclassStore},
    error::{CommandError, CommandResult},
    models::{Contestant, NewRaceclass, Raceclass},
    utils::{derive_name, sort_for_presentation},
};

/// Outcome of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceclassGeneration {
    /// Contestants processed
    pub contestants: usize,
    /// Race classes created in this run
    pub created: usize,
    /// Race classes in the event after the run
    pub raceclasses: usize,
}

/// Race class generator
pub struct RaceclassGenerator;

impl RaceclassGenerator {
    /// Generate race classes for an event and assign their presentation order
    pub async fn generate_raceclasses<E, R, C>(
        events: &E,
        raceclasses: &R,
        contestants: &C,
        event_id: &Uuid,
    ) -> CommandResult<RaceclassGeneration>
    where
        E: EventStore + ?Sized,
        R: RaceclassStore + ?Sized,
        C: ContestantStore + ?Sized,
    {
        events
            .get_event(event_id)
            .await?
            .ok_or(CommandError::EventNotFound(*event_id))?;

        let contestants = contestants.list_contestants(event_id).await?;
        info!(event_id = %event_id, contestants = contestants.len(), "Generating race classes");

        // Race classes whose counter was restarted in this run
        let mut counted = HashSet::new();
        let mut created = 0;

        for contestant in &contestants {
            if Self::count_contestant(raceclasses, event_id, contestant, &mut counted).await? {
                created += 1;
            }
        }

        let mut all = raceclasses.list_raceclasses(event_id).await?;
        assign_presentation_order(&mut all);

        for mut raceclass in all.iter().cloned() {
            if !counted.contains(&raceclass.id) {
                raceclass.no_of_contestants = 0;
            }
            raceclasses
                .update_raceclass(event_id, &raceclass.id, &raceclass)
                .await
                .map_err(|source| {
                    warn!(event_id = %event_id, raceclass = %raceclass.name, "Race class order update failed");
                    CommandError::RaceclassUpdateFailed { name: raceclass.name.clone(), source }
                })?;
        }

        info!(
            event_id = %event_id,
            created,
            raceclasses = all.len(),
            "Race classes generated"
        );

        Ok(RaceclassGeneration {
            contestants: contestants.len(),
            created,
            raceclasses: all.len(),
        })
    }

    /// Count one contestant into its race class, creating the class if needed.
    /// Returns whether a race class was created.
    async fn count_contestant<R>(
        raceclasses: &R,
        event_id: &Uuid,
        contestant: &Contestant,
        counted: &mut HashSet<Uuid>,
    ) -> CommandResult<bool>
    where
        R: RaceclassStore + ?Sized,
    {
        let mut matches = raceclasses
            .list_raceclasses_by_ageclass(event_id, &contestant.ageclass)
            .await?;

        match matches.len() {
            0 => {
                let new = new_raceclass_for(contestant);
                let id = raceclasses
                    .create_raceclass(event_id, &new)
                    .await
                    .map_err(|source| CommandError::RaceclassCreateFailed {
                        name: new.name.clone(),
                        source,
                    })?;
                counted.insert(id);
                info!(
                    event_id = %event_id,
                    raceclass = %new.name,
                    ageclass = %contestant.ageclass,
                    "Race class created"
                );
                Ok(true)
            }
            1 => {
                let Some(mut raceclass) = matches.pop() else {
                    return Ok(false);
                };
                raceclass.no_of_contestants = if counted.insert(raceclass.id) {
                    1
                } else {
                    raceclass.no_of_contestants + 1
                };
                raceclasses
                    .update_raceclass(event_id, &raceclass.id, &raceclass)
                    .await
                    .map_err(|source| CommandError::RaceclassUpdateFailed {
                        name: raceclass.name.clone(),
                        source,
                    })?;
                debug!(
                    raceclass = %raceclass.name,
                    no_of_contestants = raceclass.no_of_contestants,
                    "Race class counter updated"
                );
                Ok(false)
            }
            count => {
                warn!(
                    event_id = %event_id,
                    ageclass = %contestant.ageclass,
                    count,
                    "Ageclass maps to several race classes"
                );
                Err(CommandError::RaceclassNotUniqueName {
                    ageclass: contestant.ageclass.clone(),
                    count,
                })
            }
        }
    }
}

/// Race class created on the first encounter of an ageclass
fn new_raceclass_for(contestant: &Contestant) -> NewRaceclass {
    NewRaceclass {
        name: derive_name(&contestant.ageclass),
        ageclasses: vec![contestant.ageclass.clone()],
        no_of_contestants: 1,
        group: None,
        order: None,
        ranking: NEW_RACECLASS_RANKING,
        seeding: NEW_RACECLASS_SEEDING,
        distance: contestant.distance.clone(),
    }
}

/// Sort race classes by name and number them: one group, orders `1..=K`
pub fn assign_presentation_order(raceclasses: &mut [Raceclass]) {
    sort_for_presentation(raceclasses);
    for (order, raceclass) in (FIRST_RACECLASS_ORDER..).zip(raceclasses.iter_mut()) {
        raceclass.group = Some(GENERATED_RACECLASS_GROUP);
        raceclass.order = Some(order);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        db::{
            store::{MockEventStore, MockRaceclassStore},
            MemoryStore, StoreError,
        },
        models::{Event, NewContestant, NewEvent},
    };

    async fn event_with_contestants(store: &MemoryStore, ageclasses: &[&str]) -> Uuid {
        let event = store
            .insert_event(NewEvent { name: "Sprint".into(), ..Default::default() })
            .await;
        for (i, ageclass) in ageclasses.iter().enumerate() {
            store
                .insert_contestant(
                    event.id,
                    NewContestant {
                        first_name: format!("Skier{i}"),
                        last_name: "Nordmann".into(),
                        ageclass: ageclass.to_string(),
                        distance: Some("1.2 km".into()),
                        ..Default::default()
                    },
                )
                .await;
        }
        event.id
    }

    async fn generate(store: &MemoryStore, event_id: &Uuid) -> CommandResult<RaceclassGeneration> {
        RaceclassGenerator::generate_raceclasses(store, store, store, event_id).await
    }

    fn event(id: Uuid) -> Event {
        Event {
            id,
            name: "Sprint".into(),
            competition_format: None,
            date_of_event: None,
            time_of_event: None,
            organiser: None,
            webpage: None,
            information: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn stored_raceclass(event_id: Uuid, name: &str, ageclass: &str) -> Raceclass {
        Raceclass {
            id: Uuid::new_v4(),
            event_id,
            name: name.into(),
            ageclasses: vec![ageclass.into()],
            no_of_contestants: 0,
            group: None,
            order: None,
            ranking: true,
            seeding: false,
            distance: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_unknown_event_fails_without_writes() {
        let store = MemoryStore::new();
        let other = event_with_contestants(&store, &["G 12 år"]).await;

        let result = generate(&store, &Uuid::new_v4()).await;
        assert!(matches!(result, Err(CommandError::EventNotFound(_))));
        assert!(store.list_raceclasses(&other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_creates_one_raceclass_per_ageclass_with_counts() {
        let store = MemoryStore::new();
        let event_id =
            event_with_contestants(&store, &["G 12 år", "J 12 år", "G 12 år", "G 11 år", "G 12 år"])
                .await;

        let outcome = generate(&store, &event_id).await.unwrap();
        assert_eq!(outcome.contestants, 5);
        assert_eq!(outcome.created, 3);
        assert_eq!(outcome.raceclasses, 3);

        let raceclasses = store.list_raceclasses(&event_id).await.unwrap();
        let count_of = |name: &str| {
            raceclasses
                .iter()
                .find(|r| r.name == name)
                .map(|r| r.no_of_contestants)
        };
        assert_eq!(count_of("G12"), Some(3));
        assert_eq!(count_of("J12"), Some(1));
        assert_eq!(count_of("G11"), Some(1));

        let g12 = raceclasses.iter().find(|r| r.name == "G12").unwrap();
        assert_eq!(g12.ageclasses, vec!["G 12 år".to_string()]);
        assert!(g12.ranking);
        assert!(!g12.seeding);
        assert_eq!(g12.distance.as_deref(), Some("1.2 km"));
    }

    #[tokio::test]
    async fn test_orders_are_contiguous_in_descending_name_order() {
        let store = MemoryStore::new();
        let event_id =
            event_with_contestants(&store, &["G 10 år", "J 12 år", "G 12 år", "J 10 år"]).await;

        generate(&store, &event_id).await.unwrap();

        let mut raceclasses = store.list_raceclasses(&event_id).await.unwrap();
        raceclasses.sort_by_key(|r| r.order);
        let names: Vec<_> = raceclasses.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["J12", "G12", "J10", "G10"]);

        let orders: Vec<_> = raceclasses.iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![Some(1), Some(2), Some(3), Some(4)]);
        assert!(raceclasses.iter().all(|r| r.group == Some(GENERATED_RACECLASS_GROUP)));
    }

    #[tokio::test]
    async fn test_second_run_keeps_counts_and_order() {
        let store = MemoryStore::new();
        let event_id = event_with_contestants(&store, &["G 12 år", "G 12 år", "J 13 år"]).await;

        generate(&store, &event_id).await.unwrap();
        let first = store.list_raceclasses(&event_id).await.unwrap();

        let outcome = generate(&store, &event_id).await.unwrap();
        assert_eq!(outcome.created, 0);
        let second = store.list_raceclasses(&event_id).await.unwrap();

        let snapshot = |rcs: &[Raceclass]| {
            let mut v: Vec<_> = rcs
                .iter()
                .map(|r| (r.name.clone(), r.no_of_contestants, r.group, r.order))
                .collect();
            v.sort();
            v
        };
        assert_eq!(snapshot(&first), snapshot(&second));
    }

    #[tokio::test]
    async fn test_merged_raceclass_is_reused() {
        let store = MemoryStore::new();
        let event_id = event_with_contestants(&store, &["G 15 år", "G 16 år", "G 16 år"]).await;

        generate(&store, &event_id).await.unwrap();
        for rc in store.list_raceclasses(&event_id).await.unwrap() {
            assert!(store.remove_raceclass(&event_id, &rc.id).await);
        }
        store
            .insert_raceclass(
                event_id,
                NewRaceclass {
                    name: "G15/16".into(),
                    ageclasses: vec!["G 15 år".into(), "G 16 år".into()],
                    ranking: true,
                    ..Default::default()
                },
            )
            .await;

        let outcome = generate(&store, &event_id).await.unwrap();
        assert_eq!(outcome.created, 0);

        let raceclasses = store.list_raceclasses(&event_id).await.unwrap();
        assert_eq!(raceclasses.len(), 1);
        assert_eq!(raceclasses[0].name, "G15/16");
        assert_eq!(raceclasses[0].no_of_contestants, 3);
        assert_eq!(raceclasses[0].order, Some(FIRST_RACECLASS_ORDER));
    }

    #[tokio::test]
    async fn test_raceclass_without_contestants_is_zeroed() {
        let store = MemoryStore::new();
        let event_id = event_with_contestants(&store, &["G 12 år"]).await;
        store
            .insert_raceclass(
                event_id,
                NewRaceclass {
                    name: "J12".into(),
                    ageclasses: vec!["J 12 år".into()],
                    no_of_contestants: 4,
                    ..Default::default()
                },
            )
            .await;

        generate(&store, &event_id).await.unwrap();

        let raceclasses = store.list_raceclasses(&event_id).await.unwrap();
        let j12 = raceclasses.iter().find(|r| r.name == "J12").unwrap();
        assert_eq!(j12.no_of_contestants, 0);
        assert_eq!(j12.order, Some(1));
    }

    #[tokio::test]
    async fn test_ambiguous_ageclass_fails() {
        let store = MemoryStore::new();
        let event_id = event_with_contestants(&store, &["G 15 år"]).await;
        for name in ["G15", "G15/16"] {
            store
                .insert_raceclass(
                    event_id,
                    NewRaceclass {
                        name: name.into(),
                        ageclasses: vec!["G 15 år".into()],
                        ..Default::default()
                    },
                )
                .await;
        }

        let result = generate(&store, &event_id).await;
        assert!(matches!(
            result,
            Err(CommandError::RaceclassNotUniqueName { ref ageclass, count: 2 }) if ageclass == "G 15 år"
        ));
    }

    #[tokio::test]
    async fn test_create_rejected_by_store() {
        let store = MemoryStore::new();
        let event_id = event_with_contestants(&store, &["G 12 år"]).await;

        let mut events = MockEventStore::new();
        events.expect_get_event().returning(|id| Ok(Some(event(*id))));
        let mut raceclasses = MockRaceclassStore::new();
        raceclasses
            .expect_list_raceclasses_by_ageclass()
            .returning(|_, _| Ok(vec![]));
        raceclasses
            .expect_create_raceclass()
            .times(1)
            .returning(|_, _| Err(StoreError::Rejected("quota".into())));
        raceclasses.expect_list_raceclasses().never();

        let result =
            RaceclassGenerator::generate_raceclasses(&events, &raceclasses, &store, &event_id).await;
        assert!(matches!(
            result,
            Err(CommandError::RaceclassCreateFailed { ref name, .. }) if name == "G12"
        ));
    }

    #[tokio::test]
    async fn test_update_rejected_by_store() {
        let store = MemoryStore::new();
        let event_id = event_with_contestants(&store, &["G 12 år"]).await;

        let mut events = MockEventStore::new();
        events.expect_get_event().returning(|id| Ok(Some(event(*id))));
        let mut raceclasses = MockRaceclassStore::new();
        raceclasses
            .expect_list_raceclasses_by_ageclass()
            .returning(|event_id, ageclass| Ok(vec![stored_raceclass(*event_id, "G12", ageclass)]));
        raceclasses
            .expect_update_raceclass()
            .returning(|_, _, _| Err(StoreError::NotFound));
        raceclasses.expect_create_raceclass().never();

        let result =
            RaceclassGenerator::generate_raceclasses(&events, &raceclasses, &store, &event_id).await;
        assert!(matches!(result, Err(CommandError::RaceclassUpdateFailed { .. })));
    }

    #[tokio::test]
    async fn test_order_update_rejected_by_store() {
        let store = MemoryStore::new();
        let event_id = event_with_contestants(&store, &["J 10 år", "G 12 år"]).await;

        let mut events = MockEventStore::new();
        events.expect_get_event().returning(|id| Ok(Some(event(*id))));
        let mut raceclasses = MockRaceclassStore::new();
        raceclasses
            .expect_list_raceclasses_by_ageclass()
            .times(2)
            .returning(|_, _| Ok(vec![]));
        raceclasses
            .expect_create_raceclass()
            .times(2)
            .returning(|_, _| Ok(Uuid::new_v4()));
        raceclasses.expect_list_raceclasses().times(1).returning(|event_id| {
            Ok(vec![
                stored_raceclass(*event_id, "J10", "J 10 år"),
                stored_raceclass(*event_id, "G12", "G 12 år"),
            ])
        });
        raceclasses
            .expect_update_raceclass()
            .withf(|_, _, r| r.name == "G12" && r.order == Some(1))
            .times(1)
            .returning(|_, _, _| Ok(()));
        raceclasses
            .expect_update_raceclass()
            .withf(|_, _, r| r.name == "J10" && r.order == Some(2))
            .times(1)
            .returning(|_, _, _| Err(StoreError::Rejected("readonly".into())));

        let result =
            RaceclassGenerator::generate_raceclasses(&events, &raceclasses, &store, &event_id).await;
        assert!(matches!(
            result,
            Err(CommandError::RaceclassUpdateFailed { ref name, source: StoreError::Rejected(_) })
                if name == "J10"
        ));
    }

    #[test]
    fn test_assign_presentation_order_is_stable_for_equal_names() {
        let event_id = Uuid::new_v4();
        let mut raceclasses = vec![
            stored_raceclass(event_id, "G12", "G 12 år"),
            stored_raceclass(event_id, "G12", "G 12 år b"),
            stored_raceclass(event_id, "J16", "J 16 år"),
        ];
        let first_g12 = raceclasses[0].id;

        assign_presentation_order(&mut raceclasses);

        assert_eq!(raceclasses[0].name, "J16");
        assert_eq!(raceclasses[1].id, first_g12);
        let orders: Vec<_> = raceclasses.iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![Some(1), Some(2), Some(3)]);
    }
}
