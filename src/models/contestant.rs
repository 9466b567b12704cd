//! Contestant model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Contestant database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contestant {
    pub id: Uuid,
    pub event_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    /// Free-text age/gender category, e.g. "G 12 år"
    pub ageclass: String,
    pub region: Option<String>,
    pub club: Option<String>,
    pub team: Option<String>,
    pub email: Option<String>,
    pub distance: Option<String>,
    /// Assigned by bib assignment only
    pub bib: Option<i32>,
    pub registration_date_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating or replacing a contestant; the bib is left
/// to bib assignment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewContestant {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub ageclass: String,
    pub region: Option<String>,
    pub club: Option<String>,
    pub team: Option<String>,
    pub email: Option<String>,
    pub distance: Option<String>,
    pub registration_date_time: Option<DateTime<Utc>>,
}
