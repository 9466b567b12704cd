//! Contestant request DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_PERSON_NAME_LENGTH;

/// Create or replace contestant request
#[derive(Debug, Deserialize, Validate)]
pub struct ContestantRequest {
    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub last_name: String,

    pub birth_date: Option<NaiveDate>,

    pub gender: Option<String>,

    /// Age/gender category label, e.g. "G 12 år"
    #[validate(length(min = 1))]
    pub ageclass: String,

    pub region: Option<String>,

    pub club: Option<String>,

    pub team: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub distance: Option<String>,

    pub registration_date_time: Option<DateTime<Utc>>,
}
