//! Custom error types and handling
//!
//! `CommandError` is the closed set of outcomes of the two batch commands.
//! `AppError` is what handlers return; it wraps command and store errors and
//! converts to an HTTP response for Axum.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::db::StoreError;

/// Failures of race class generation and bib assignment
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Event {0} not found")]
    EventNotFound(Uuid),

    #[error("Event {0} has no race classes")]
    NoRaceclassInEvent(Uuid),

    #[error("Race class {name} has no value for group")]
    NoValueForGroup { name: String },

    #[error("Race class {name} has no value for order")]
    NoValueForOrder { name: String },

    #[error("Ageclass {ageclass} is mapped to {count} race classes")]
    RaceclassNotUniqueName { ageclass: String, count: usize },

    #[error("Failed to create race class {name}: {source}")]
    RaceclassCreateFailed { name: String, source: StoreError },

    #[error("Failed to update race class {name}: {source}")]
    RaceclassUpdateFailed { name: String, source: StoreError },

    #[error("Ageclass {ageclass} is not mapped to any race class")]
    NoRaceclassForAgeclass { ageclass: String },

    #[error("Failed to update contestant {contestant_id}: {source}")]
    ContestantUpdateFailed { contestant_id: Uuid, source: StoreError },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl CommandError {
    /// Get the error code for this error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EventNotFound(_) => "EVENT_NOT_FOUND",
            Self::NoRaceclassInEvent(_) => "NO_RACECLASS_IN_EVENT",
            Self::NoValueForGroup { .. } => "NO_VALUE_FOR_GROUP",
            Self::NoValueForOrder { .. } => "NO_VALUE_FOR_ORDER",
            Self::RaceclassNotUniqueName { .. } => "RACECLASS_NOT_UNIQUE_NAME",
            Self::RaceclassCreateFailed { .. } => "RACECLASS_CREATE_FAILED",
            Self::RaceclassUpdateFailed { .. } => "RACECLASS_UPDATE_FAILED",
            Self::NoRaceclassForAgeclass { .. } => "NO_RACECLASS_FOR_AGECLASS",
            Self::ContestantUpdateFailed { .. } => "CONTESTANT_UPDATE_FAILED",
            Self::Store(_) => "DATABASE_ERROR",
        }
    }

    /// Get the HTTP status code for this error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EventNotFound(_) => StatusCode::NOT_FOUND,
            Self::NoRaceclassInEvent(_)
            | Self::NoValueForGroup { .. }
            | Self::NoValueForOrder { .. }
            | Self::RaceclassNotUniqueName { .. }
            | Self::NoRaceclassForAgeclass { .. } => StatusCode::BAD_REQUEST,
            Self::RaceclassCreateFailed { .. }
            | Self::RaceclassUpdateFailed { .. }
            | Self::ContestantUpdateFailed { .. }
            | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type alias for the batch commands
pub type CommandResult<T> = Result<T, CommandError>;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    // Batch commands
    #[error(transparent)]
    Command(#[from] CommandError),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Command(e) => e.error_code(),
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::Command(e) => e.status_code(),
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server-side failures but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            AppError::Command(e) if status.is_server_error() => {
                tracing::error!(code = e.error_code(), "Command failed: {}", e);
                e.to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        if err.is_unique_violation() {
            return AppError::AlreadyExists("Resource already exists".to_string());
        }
        if err.is_foreign_key_violation() {
            return AppError::NotFound("Referenced resource not found".to_string());
        }
        match err {
            StoreError::NotFound => AppError::NotFound("Resource not found".to_string()),
            StoreError::Rejected(reason) => AppError::InvalidInput(reason),
            other => AppError::Database(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_errors_keep_distinct_codes() {
        let event_id = Uuid::new_v4();
        let errors = [
            CommandError::EventNotFound(event_id),
            CommandError::NoRaceclassInEvent(event_id),
            CommandError::NoValueForGroup { name: "G12".into() },
            CommandError::NoValueForOrder { name: "G12".into() },
            CommandError::RaceclassNotUniqueName { ageclass: "G 12 år".into(), count: 2 },
            CommandError::RaceclassCreateFailed { name: "G12".into(), source: StoreError::NotFound },
            CommandError::RaceclassUpdateFailed { name: "G12".into(), source: StoreError::NotFound },
            CommandError::NoRaceclassForAgeclass { ageclass: "G 12 år".into() },
            CommandError::ContestantUpdateFailed { contestant_id: event_id, source: StoreError::NotFound },
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_command_error_status() {
        let err = AppError::from(CommandError::EventNotFound(Uuid::new_v4()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "EVENT_NOT_FOUND");

        let err = AppError::from(CommandError::NoRaceclassInEvent(Uuid::new_v4()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::from(CommandError::RaceclassUpdateFailed {
            name: "G12".into(),
            source: StoreError::Rejected("readonly".into()),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err = AppError::from(StoreError::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
