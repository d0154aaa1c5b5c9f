//! Rotation fairness metrics.
//!
//! Summarizes how evenly an assignment spreads dinners over the roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Events per team | Dinners cooked by each roster team |
//! | Min / max load | Fewest / most dinners of any roster team |
//! | Spread | max load - min load |
//! | Unassigned | Events still without a team |
//! | Idle teams | Roster teams with no dinner |

use std::collections::HashMap;

use crate::models::{DinnerEvent, Roster};

/// Fairness indicators of one season assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationKpi {
    /// Dinners per team id. Includes roster teams with zero dinners.
    pub events_by_team: HashMap<String, usize>,
    /// Fewest dinners of any roster team.
    pub min_load: usize,
    /// Most dinners of any roster team.
    pub max_load: usize,
    /// Events without a cooking team.
    pub unassigned: usize,
    /// Roster teams with no dinner, in roster order.
    pub idle_teams: Vec<String>,
}

impl RotationKpi {
    /// Computes the metrics of `events` against `roster`.
    ///
    /// Teams that cook but are not on the roster (pre-assigned) are
    /// counted in `events_by_team` but not in the load range.
    pub fn calculate(events: &[DinnerEvent], roster: &Roster) -> Self {
        let mut events_by_team: HashMap<String, usize> =
            roster.iter().map(|id| (id.to_string(), 0)).collect();
        let mut unassigned = 0;

        for event in events {
            match &event.cooking_team_id {
                Some(team_id) => *events_by_team.entry(team_id.clone()).or_default() += 1,
                None => unassigned += 1,
            }
        }

        let loads: Vec<usize> = roster
            .iter()
            .map(|id| events_by_team.get(id).copied().unwrap_or(0))
            .collect();
        let idle_teams = roster
            .iter()
            .zip(&loads)
            .filter(|&(_, &load)| load == 0)
            .map(|(id, _)| id.to_string())
            .collect();

        Self {
            min_load: loads.iter().copied().min().unwrap_or(0),
            max_load: loads.iter().copied().max().unwrap_or(0),
            events_by_team,
            unassigned,
            idle_teams,
        }
    }

    /// max load - min load.
    pub fn spread(&self) -> usize {
        self.max_load - self.min_load
    }

    /// Whether no roster team cooks more than `tolerance` dinners more than another.
    pub fn is_balanced(&self, tolerance: usize) -> bool {
        self.spread() <= tolerance
    }
}
