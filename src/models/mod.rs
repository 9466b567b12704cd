//! Domain models
//!
//! Events own race classes and contestants; every other record carries the
//! owning `event_id`.

pub mod contestant;
pub mod event;
pub mod raceclass;

pub use contestant::*;
pub use event::*;
pub use raceclass::*;
