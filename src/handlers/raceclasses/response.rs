//! Race class response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::Raceclass;

/// Race class response
#[derive(Debug, Serialize)]
pub struct RaceclassResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub ageclasses: Vec<String>,
    pub no_of_contestants: i32,
    pub group: Option<i32>,
    pub order: Option<i32>,
    pub ranking: bool,
    pub seeding: bool,
    pub distance: Option<String>,
}

impl From<Raceclass> for RaceclassResponse {
    fn from(r: Raceclass) -> Self {
        Self {
            id: r.id,
            event_id: r.event_id,
            name: r.name,
            ageclasses: r.ageclasses,
            no_of_contestants: r.no_of_contestants,
            group: r.group,
            order: r.order,
            ranking: r.ranking,
            seeding: r.seeding,
            distance: r.distance,
        }
    }
}

/// Race class list response
#[derive(Debug, Serialize)]
pub struct RaceclassesListResponse {
    pub raceclasses: Vec<RaceclassResponse>,
    pub total: usize,
}
