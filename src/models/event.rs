//! Event model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Event database model
///
/// An event owns all race classes and contestants that reference its id.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub competition_format: Option<String>,
    pub date_of_event: Option<NaiveDate>,
    pub time_of_event: Option<NaiveTime>,
    pub organiser: Option<String>,
    pub webpage: Option<String>,
    pub information: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating or replacing an event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub competition_format: Option<String>,
    pub date_of_event: Option<NaiveDate>,
    pub time_of_event: Option<NaiveTime>,
    pub organiser: Option<String>,
    pub webpage: Option<String>,
    pub information: Option<String>,
}
