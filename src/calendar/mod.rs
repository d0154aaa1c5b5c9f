//! Cooking calendar computation.
//!
//! Derives the qualifying cooking dates of a season from its weekday
//! selection, date range and holidays, and builds the gap-inclusive slot
//! sequence the event assigner consumes.
//!
//! # Usage
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use cooking_rota::calendar::compute_cooking_dates;
//! use cooking_rota::models::{DateRange, WeekdaySelection};
//!
//! let days = WeekdaySelection::from_weekdays([Weekday::Mon, Weekday::Wed, Weekday::Fri]);
//! let season = DateRange::new(
//!     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
//! ).unwrap();
//! let dates = compute_cooking_dates(&days, &season, &[]);
//! assert_eq!(dates.len(), 12);
//! ```

mod cursor;

pub use cursor::{find_first_cooking_day_in_dates, is_cooking_day, next_cooking_day};

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{is_holiday, CalendarSlot, DateRange, DinnerEvent, HolidayRange, WeekdaySelection};

/// Every cooking date in `range`, ascending and without holidays.
///
/// A date qualifies iff its weekday is flagged in `selection` and no
/// holiday covers it. Holidays need not be sorted.
pub fn compute_cooking_dates(
    selection: &WeekdaySelection,
    range: &DateRange,
    holidays: &[HolidayRange],
) -> Vec<NaiveDate> {
    if selection.is_empty() {
        return Vec::new();
    }

    range
        .iter_days()
        .filter(|&date| is_cooking_day(date, selection))
        .filter(|&date| !is_holiday(date, holidays))
        .collect()
}

/// Cooking weekdays inside `range` that a holiday blocks, ascending.
///
/// These are the implicit holiday slots: no dinner happens, but the
/// rotation quota still advances over them.
pub fn holiday_cooking_dates(
    selection: &WeekdaySelection,
    range: &DateRange,
    holidays: &[HolidayRange],
) -> Vec<NaiveDate> {
    if selection.is_empty() || holidays.is_empty() {
        return Vec::new();
    }

    range
        .iter_days()
        .filter(|&date| is_cooking_day(date, selection))
        .filter(|&date| is_holiday(date, holidays))
        .collect()
}

/// Merges dinner events with holiday slots into one ascending sequence.
///
/// Every blocked cooking weekday yields exactly one holiday slot. An event
/// dated on such a day (persisted before the holiday was added) is dropped:
/// no dinner takes place and the date must not consume quota twice.
///
/// Events keep their relative order on equal dates; a holiday slot sorts
/// before an event on the same date. Events outside `range` are kept, the
/// caller owns which events belong to the season.
pub fn chronological_slots(
    events: &[DinnerEvent],
    selection: &WeekdaySelection,
    range: &DateRange,
    holidays: &[HolidayRange],
) -> Vec<CalendarSlot> {
    let gaps = holiday_cooking_dates(selection, range, holidays);
    let kept: Vec<&DinnerEvent> = events
        .iter()
        .filter(|event| gaps.binary_search(&event.date).is_err())
        .collect();
    if kept.len() < events.len() {
        debug!(
            dropped = events.len() - kept.len(),
            "events on holidays dropped from slots"
        );
    }

    let mut slots: Vec<CalendarSlot> = gaps
        .into_iter()
        .map(CalendarSlot::Holiday)
        .chain(kept.into_iter().cloned().map(CalendarSlot::Event))
        .collect();

    // Stable: holidays were pushed first, events keep input order.
    slots.sort_by_key(CalendarSlot::date);
    slots
}
