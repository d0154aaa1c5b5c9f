//! Weekday cursor: cooking-day lookups without holiday awareness.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::WeekdaySelection;

/// Whether `date` falls on a cooking weekday.
///
/// Pure weekday lookup; holidays are handled by the calendar only.
#[inline]
pub fn is_cooking_day(date: NaiveDate, selection: &WeekdaySelection) -> bool {
    selection.contains(date.weekday())
}

/// Chronologically earliest cooking day among `dates`.
///
/// The input may be in any order. Returns `None` for an empty list or when
/// no date qualifies.
pub fn find_first_cooking_day_in_dates(
    selection: &WeekdaySelection,
    dates: &[NaiveDate],
) -> Option<NaiveDate> {
    dates
        .iter()
        .copied()
        .filter(|&date| is_cooking_day(date, selection))
        .min()
}

/// First cooking day on or after `from`.
///
/// Returns `None` for an empty selection.
pub fn next_cooking_day(from: NaiveDate, selection: &WeekdaySelection) -> Option<NaiveDate> {
    if selection.is_empty() {
        return None;
    }
    (0..7)
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .find(|&date| is_cooking_day(date, selection))
}
