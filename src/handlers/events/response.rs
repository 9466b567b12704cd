//! Event response DTOs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Event;

/// Event response
#[derive(Debug, Serialize)]
pub struct EventResponse {
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

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            name: e.name,
            competition_format: e.competition_format,
            date_of_event: e.date_of_event,
            time_of_event: e.time_of_event,
            organiser: e.organiser,
            webpage: e.webpage,
            information: e.information,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Event list response
#[derive(Debug, Serialize)]
pub struct EventsListResponse {
    pub events: Vec<EventResponse>,
    pub total: usize,
}
