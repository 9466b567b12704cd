//! Business logic services

pub mod bib_assigner;
pub mod command_service;
pub mod contestant_service;
pub mod event_service;
pub mod raceclass_generator;
pub mod raceclass_service;

pub use bib_assigner::{BibAssigner, BibAssignment};
pub use command_service::CommandService;
pub use contestant_service::ContestantService;
pub use event_service::EventService;
pub use raceclass_generator::{RaceclassGeneration, RaceclassGenerator};
pub use raceclass_service::RaceclassService;
