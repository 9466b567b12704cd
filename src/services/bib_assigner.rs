//! Bib assignment
//!
//! Numbers every contestant of an event `1..=N`. Race classes take their bib
//! ranges in presentation order `(group, order)`; within a race class the
//! order is randomised by shuffling the whole list before a stable sort.
//!
//! Every contestant must resolve to exactly one race class before anything is
//! written. Writes are then issued one contestant at a time with no
//! transactional envelope; a failed write aborts the run and leaves earlier
//! contestants with their new bibs.

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    constants::FIRST_BIB,
    db::{ContestantStore, EventStore, RaceclassStore},
    error::{CommandError, CommandResult},
    models::{Contestant, Raceclass},
};

/// Outcome of a bib assignment run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibAssignment {
    /// Contestants that received a bib
    pub assigned: usize,
}

/// Bib assigner
pub struct BibAssigner;

impl BibAssigner {
    /// Assign contiguous bibs to all contestants of an event
    pub async fn assign_bibs<E, R, C, G>(
        events: &E,
        raceclasses: &R,
        contestants: &C,
        event_id: &Uuid,
        rng: &mut G,
    ) -> CommandResult<BibAssignment>
    where
        E: EventStore + ?Sized,
        R: RaceclassStore + ?Sized,
        C: ContestantStore + ?Sized,
        G: Rng + Send + ?Sized,
    {
        events
            .get_event(event_id)
            .await?
            .ok_or(CommandError::EventNotFound(*event_id))?;

        let raceclasses = raceclasses.list_raceclasses(event_id).await?;
        check_raceclasses(event_id, &raceclasses)?;

        let mut entries = contestants.list_contestants(event_id).await?;
        info!(event_id = %event_id, contestants = entries.len(), "Assigning bibs");

        entries.shuffle(rng);
        let numbered = number_contestants(entries, &raceclasses)?;

        for contestant in &numbered {
            contestants
                .update_contestant(event_id, &contestant.id, contestant)
                .await
                .map_err(|source| {
                    warn!(event_id = %event_id, contestant_id = %contestant.id, "Bib update failed");
                    CommandError::ContestantUpdateFailed { contestant_id: contestant.id, source }
                })?;
            debug!(contestant_id = %contestant.id, bib = ?contestant.bib, "Bib assigned");
        }

        info!(event_id = %event_id, assigned = numbered.len(), "Bibs assigned");

        Ok(BibAssignment { assigned: numbered.len() })
    }
}

/// Preconditions on the event's race classes, checked in order
pub fn check_raceclasses(event_id: &Uuid, raceclasses: &[Raceclass]) -> CommandResult<()> {
    if raceclasses.is_empty() {
        return Err(CommandError::NoRaceclassInEvent(*event_id));
    }
    if let Some(rc) = raceclasses.iter().find(|r| r.group.is_none()) {
        return Err(CommandError::NoValueForGroup { name: rc.name.clone() });
    }
    if let Some(rc) = raceclasses.iter().find(|r| r.order.is_none()) {
        return Err(CommandError::NoValueForOrder { name: rc.name.clone() });
    }
    Ok(())
}

/// Presentation position of the single race class containing `ageclass`
pub fn resolve_position(raceclasses: &[Raceclass], ageclass: &str) -> CommandResult<(i32, i32)> {
    let mut matches = raceclasses.iter().filter(|r| r.contains_ageclass(ageclass));

    let Some(raceclass) = matches.next() else {
        return Err(CommandError::NoRaceclassForAgeclass { ageclass: ageclass.to_string() });
    };
    let extra = matches.count();
    if extra > 0 {
        return Err(CommandError::RaceclassNotUniqueName {
            ageclass: ageclass.to_string(),
            count: extra + 1,
        });
    }

    match (raceclass.group, raceclass.order) {
        (None, _) => Err(CommandError::NoValueForGroup { name: raceclass.name.clone() }),
        (_, None) => Err(CommandError::NoValueForOrder { name: raceclass.name.clone() }),
        (Some(group), Some(order)) => Ok((group, order)),
    }
}

/// Stable-sort contestants by race class position and number them from
/// `FIRST_BIB`. The incoming order decides the order within a race class.
pub fn number_contestants(
    contestants: Vec<Contestant>,
    raceclasses: &[Raceclass],
) -> CommandResult<Vec<Contestant>> {
    let mut keyed = contestants
        .into_iter()
        .map(|c| Ok((resolve_position(raceclasses, &c.ageclass)?, c)))
        .collect::<CommandResult<Vec<_>>>()?;

    keyed.sort_by_key(|(position, _)| *position);

    Ok((FIRST_BIB..)
        .zip(keyed)
        .map(|(bib, (_, mut contestant))| {
            contestant.bib = Some(bib);
            contestant
        })
        .collect())
}
