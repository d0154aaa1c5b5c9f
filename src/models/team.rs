//! Cooking team model.
//!
//! Teams are the entities that cook dinners. Each team may own an
//! affinity: the recurring weekday(s) it is responsible for during a
//! season. A missing affinity means "not yet assigned".

use serde::{Deserialize, Serialize};

use super::WeekdaySelection;

/// A cooking team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingTeam {
    /// Unique team identifier.
    pub id: String,
    /// Display name. Used for ordering within an affinity group.
    pub name: String,
    /// Owned weekdays. `None` = not yet assigned.
    #[serde(default)]
    pub affinity: Option<WeekdaySelection>,
}

impl CookingTeam {
    /// Creates a team without an affinity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            affinity: None,
        }
    }

    /// Sets the team name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the affinity.
    pub fn with_affinity(mut self, affinity: WeekdaySelection) -> Self {
        self.affinity = Some(affinity);
        self
    }

    /// Whether the team already owns an affinity.
    pub fn has_affinity(&self) -> bool {
        self.affinity.is_some()
    }
}
