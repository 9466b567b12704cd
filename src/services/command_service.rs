//! Batch command service
//!
//! Wires the Postgres repositories into the race class generator and the bib
//! assigner.

use rand::{rngs::StdRng, SeedableRng};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::CommandsConfig,
    db::repositories::{ContestantRepository, EventRepository, RaceclassRepository},
    error::CommandResult,
    services::{BibAssigner, BibAssignment, RaceclassGeneration, RaceclassGenerator},
};

/// Command service
pub struct CommandService;

impl CommandService {
    /// Generate race classes for an event from its contestants
    pub async fn generate_raceclasses(pool: &PgPool, event_id: &Uuid) -> CommandResult<RaceclassGeneration> {
        RaceclassGenerator::generate_raceclasses(
            &EventRepository::new(pool),
            &RaceclassRepository::new(pool),
            &ContestantRepository::new(pool),
            event_id,
        )
        .await
    }

    /// Assign bibs to all contestants of an event
    pub async fn assign_bibs(
        pool: &PgPool,
        config: &CommandsConfig,
        event_id: &Uuid,
    ) -> CommandResult<BibAssignment> {
        let mut rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        BibAssigner::assign_bibs(
            &EventRepository::new(pool),
            &RaceclassRepository::new(pool),
            &ContestantRepository::new(pool),
            event_id,
            &mut rng,
        )
        .await
    }
}
