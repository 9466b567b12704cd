//! Raceclass model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Raceclass database model
///
/// A race class groups one or more ageclasses of a single event. `group` and
/// `order` together give its presentation position; lower sorts first.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Raceclass {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Raceclass {
    /// Check whether the given ageclass label is mapped to this race class
    pub fn contains_ageclass(&self, ageclass: &str) -> bool {
        self.ageclasses.iter().any(|a| a == ageclass)
    }

    /// Presentation position, if both group and order are set
    pub fn position(&self) -> Option<(i32, i32)> {
        Some((self.group?, self.order?))
    }
}

/// Fields supplied when creating a race class
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRaceclass {
    pub name: String,
    pub ageclasses: Vec<String>,
    pub no_of_contestants: i32,
    pub group: Option<i32>,
    pub order: Option<i32>,
    pub ranking: bool,
    pub seeding: bool,
    pub distance: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raceclass(ageclasses: &[&str], group: Option<i32>, order: Option<i32>) -> Raceclass {
        Raceclass {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            name: "G15/16".to_string(),
            ageclasses: ageclasses.iter().map(|a| a.to_string()).collect(),
            no_of_contestants: 0,
            group,
            order,
            ranking: true,
            seeding: false,
            distance: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_contains_ageclass_is_exact_membership() {
        let rc = raceclass(&["G 15 år", "G 16 år"], None, None);
        assert!(rc.contains_ageclass("G 15 år"));
        assert!(rc.contains_ageclass("G 16 år"));
        assert!(!rc.contains_ageclass("G 15"));
        assert!(!rc.contains_ageclass("G 17 år"));
    }

    #[test]
    fn test_position_requires_group_and_order() {
        assert_eq!(raceclass(&[], Some(1), Some(3)).position(), Some((1, 3)));
        assert_eq!(raceclass(&[], None, Some(3)).position(), None);
        assert_eq!(raceclass(&[], Some(1), None).position(), None);
    }
}
