//! Contestant response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Contestant;

/// Contestant response
#[derive(Debug, Serialize)]
pub struct ContestantResponse {
    pub id: Uuid,
    pub event_id: Uuid,
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
    pub bib: Option<i32>,
    pub registration_date_time: Option<DateTime<Utc>>,
}

impl From<Contestant> for ContestantResponse {
    fn from(c: Contestant) -> Self {
        Self {
            id: c.id,
            event_id: c.event_id,
            first_name: c.first_name,
            last_name: c.last_name,
            birth_date: c.birth_date,
            gender: c.gender,
            ageclass: c.ageclass,
            region: c.region,
            club: c.club,
            team: c.team,
            email: c.email,
            distance: c.distance,
            bib: c.bib,
            registration_date_time: c.registration_date_time,
        }
    }
}

/// Contestant list response
#[derive(Debug, Serialize)]
pub struct ContestantsListResponse {
    pub contestants: Vec<ContestantResponse>,
    pub total: usize,
}
