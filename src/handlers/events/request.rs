//! Event request DTOs

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

/// Create or replace event request
#[derive(Debug, Deserialize, Validate)]
pub struct EventRequest {
    #[validate(length(min = 1))]
    pub name: String,

    /// Competition format, e.g. "Individual Sprint"
    pub competition_format: Option<String>,

    pub date_of_event: Option<NaiveDate>,

    pub time_of_event: Option<NaiveTime>,

    pub organiser: Option<String>,

    #[validate(url)]
    pub webpage: Option<String>,

    pub information: Option<String>,
}
