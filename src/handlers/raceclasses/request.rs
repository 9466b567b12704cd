//! Race class request DTOs

use serde::Deserialize;
use validator::Validate;

/// Update race class request
///
/// Listing several ageclasses merges them into this race class.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRaceclassRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub ageclasses: Vec<String>,

    #[validate(range(min = 1))]
    pub group: Option<i32>,

    #[validate(range(min = 1))]
    pub order: Option<i32>,

    #[serde(default = "default_ranking")]
    pub ranking: bool,

    #[serde(default)]
    pub seeding: bool,

    pub distance: Option<String>,

    /// Overrides the counter; normally maintained by generation
    #[validate(range(min = 0))]
    pub no_of_contestants: Option<i32>,
}

fn default_ranking() -> bool {
    true
}

/// Race class list filter
#[derive(Debug, Deserialize)]
pub struct RaceclassQuery {
    pub ageclass: Option<String>,
}
