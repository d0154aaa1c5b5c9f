//! Dinner event, calendar slot and roster models.
//!
//! A dinner event is a persisted calendar slot that either already has a
//! cooking team or needs one. Holidays are slots too, but only for quota
//! bookkeeping: they never carry a team and never leave the assigner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted dinner event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinnerEvent {
    /// Event identifier (empty until persisted).
    #[serde(default)]
    pub id: String,
    /// Dinner date.
    pub date: NaiveDate,
    /// Cooking team. `None` = needs assignment.
    #[serde(default)]
    pub cooking_team_id: Option<String>,
}

impl DinnerEvent {
    /// Creates an unassigned event.
    pub fn new(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
            cooking_team_id: None,
        }
    }

    /// Creates an event without an identifier.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(String::new(), date)
    }

    /// Sets the cooking team.
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.cooking_team_id = Some(team_id.into());
        self
    }

    /// Whether a cooking team is set.
    pub fn is_assigned(&self) -> bool {
        self.cooking_team_id.is_some()
    }
}

/// A qualifying calendar slot in a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarSlot {
    /// A dinner event, assigned or not.
    Event(DinnerEvent),
    /// A cooking weekday inside a holiday. Consumes quota, emits nothing.
    Holiday(NaiveDate),
}

impl CalendarSlot {
    /// Slot date.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Event(e) => e.date,
            Self::Holiday(date) => *date,
        }
    }

    /// Whether this is a holiday slot.
    pub fn is_holiday(&self) -> bool {
        matches!(self, Self::Holiday(_))
    }
}

impl From<DinnerEvent> for CalendarSlot {
    fn from(event: DinnerEvent) -> Self {
        Self::Event(event)
    }
}

/// Linear rotation order of team identifiers.
///
/// Derived from team affinities each run; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    team_ids: Vec<String>,
}

impl Roster {
    /// Creates a roster from an ordered list of team ids.
    pub fn new(team_ids: Vec<String>) -> Self {
        Self { team_ids }
    }

    /// Team id at a rotation position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.team_ids.get(index).map(String::as_str)
    }

    /// Number of rotation positions.
    pub fn len(&self) -> usize {
        self.team_ids.len()
    }

    /// Whether the roster has no teams.
    pub fn is_empty(&self) -> bool {
        self.team_ids.is_empty()
    }

    /// Team ids in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.team_ids.iter().map(String::as_str)
    }

    /// Team ids in rotation order.
    pub fn as_slice(&self) -> &[String] {
        &self.team_ids
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
