//! Season configuration.
//!
//! Set when a season is created or edited and immutable while scheduling.

use serde::{Deserialize, Serialize};

use super::{DateRange, HolidayRange, WeekdaySelection};
use crate::error::SeasonError;

fn default_consecutive_cooking_days() -> usize {
    1
}

/// Scheduling inputs of one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Weekdays with dinners.
    pub cooking_days: WeekdaySelection,
    /// First and last day of the season.
    pub season: DateRange,
    /// Periods without dinners, any order.
    #[serde(default)]
    pub holidays: Vec<HolidayRange>,
    /// Slots a team covers before the rotation advances (default: 1).
    #[serde(default = "default_consecutive_cooking_days")]
    pub consecutive_cooking_days: usize,
}

impl SeasonConfig {
    /// Creates a config without holidays and a quota of one day.
    pub fn new(cooking_days: WeekdaySelection, season: DateRange) -> Self {
        Self {
            cooking_days,
            season,
            holidays: Vec::new(),
            consecutive_cooking_days: default_consecutive_cooking_days(),
        }
    }

    /// Adds a holiday.
    pub fn with_holiday(mut self, holiday: HolidayRange) -> Self {
        self.holidays.push(holiday);
        self
    }

    /// Sets the consecutive cooking day quota.
    pub fn with_consecutive_cooking_days(mut self, days: usize) -> Self {
        self.consecutive_cooking_days = days;
        self
    }

    /// Parses and validates a JSON config.
    ///
    /// # Errors
    /// [`SeasonError::InvalidConfig`] on malformed JSON (including a reversed
    /// date range), [`SeasonError::InvalidConsecutiveCookingDays`] on a zero quota.
    pub fn from_json(json: &str) -> Result<Self, SeasonError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants serde cannot express.
    ///
    /// # Errors
    /// [`SeasonError::InvalidConsecutiveCookingDays`] on a zero quota.
    pub fn validate(&self) -> Result<(), SeasonError> {
        if self.consecutive_cooking_days == 0 {
            return Err(SeasonError::InvalidConsecutiveCookingDays);
        }
        Ok(())
    }
}
