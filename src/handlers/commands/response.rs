//! Command response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::services::{BibAssignment, RaceclassGeneration};

/// Race class generation response
#[derive(Debug, Serialize)]
pub struct GenerateRaceclassesResponse {
    pub event_id: Uuid,
    #[serde(flatten)]
    pub outcome: RaceclassGeneration,
}

/// Bib assignment response
#[derive(Debug, Serialize)]
pub struct AssignBibsResponse {
    pub event_id: Uuid,
    #[serde(flatten)]
    pub outcome: BibAssignment,
}
