//! Database connection management

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{config::DatabaseConfig, db::error::StoreResult};

/// Create a new database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> StoreResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;

    Ok(pool)
}

/// Round-trip a trivial query to verify the pool is usable
pub async fn ping(pool: &PgPool) -> StoreResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
