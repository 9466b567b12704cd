//! Persistence error types

use thiserror::Error;

/// Errors raised by the record stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Rejected by store: {0}")]
    Rejected(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Database(sqlx::Error::Database(e)) if e.is_unique_violation()
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Database(sqlx::Error::Database(e)) if e.is_foreign_key_violation()
        )
    }
}
