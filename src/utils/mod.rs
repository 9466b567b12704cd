//! Utility functions

pub mod raceclass_name;
pub mod validation;

pub use raceclass_name::{compare_names, derive_name, sort_for_presentation, NameSortKey};
pub use validation::{sanitize_string, validate_ageclass, validate_ageclasses, validate_event_name};
