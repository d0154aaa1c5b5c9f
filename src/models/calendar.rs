//! Date range and holiday models.
//!
//! A season spans a [`DateRange`]; holidays are [`HolidayRange`]s blocked
//! out of it.
//!
//! # Precedence
//! Holidays override the weekday selection. A date is a cooking date iff:
//! - It falls within the season range, AND
//! - Its weekday is a cooking day, AND
//! - It does NOT fall within any holiday range.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SeasonError;

/// A date interval [start, end].
///
/// Closed interval: includes both start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = SeasonError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Errors
    /// [`SeasonError::InvalidDateRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SeasonError> {
        if start > end {
            return Err(SeasonError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering a single day.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// First day (inclusive).
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day (inclusive).
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range.
    pub fn num_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Whether a date falls within this range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Every date in the range, ascending.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.num_days() as u64).filter_map(move |offset| start.checked_add_days(Days::new(offset)))
    }
}

/// A holiday period with no dinners.
///
/// Callers may supply holidays in any order; overlapping holidays are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayRange {
    /// Blocked dates.
    pub range: DateRange,
}

impl HolidayRange {
    /// Creates a holiday range.
    ///
    /// # Errors
    /// [`SeasonError::InvalidDateRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SeasonError> {
        DateRange::new(start, end).map(|range| Self { range })
    }

    /// Holiday covering a single day.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            range: DateRange::single(day),
        }
    }

    /// Whether a date is blocked by this holiday.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.range.contains(date)
    }
}

impl From<DateRange> for HolidayRange {
    fn from(range: DateRange) -> Self {
        Self { range }
    }
}

/// Whether a date is blocked by any of `holidays`.
pub fn is_holiday(date: NaiveDate, holidays: &[HolidayRange]) -> bool {
    holidays.iter().any(|h| h.contains(date))
}
