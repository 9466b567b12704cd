//! Database repositories
//!
//! Repositories handle all direct database interactions and implement the
//! store traits the batch commands depend on.

pub mod contestant_repo;
pub mod event_repo;
pub mod raceclass_repo;

pub use contestant_repo::ContestantRepository;
pub use event_repo::EventRepository;
pub use raceclass_repo::RaceclassRepository;
