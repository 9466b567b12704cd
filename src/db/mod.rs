//! Database module
//!
//! This module handles database connections, migrations, the record store
//! interfaces and their Postgres and in-memory implementations.

pub mod connection;
pub mod error;
pub mod memory;
pub mod repositories;
pub mod store;

use sqlx::PgPool;

pub use connection::*;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::{ContestantStore, EventStore, RaceclassStore};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
