//! Raceday - Sporting Event Administration
//!
//! This library administers sporting-event metadata: events, race classes and
//! contestants, and runs the two batch commands that turn an event's
//! contestant list into ordered race classes and contiguous bib numbers.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic, including the race class generator and
//!   the bib assigner
//! - **Repositories**: Database access, behind the record store traits
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult, CommandError, CommandResult};
pub use state::AppState;
