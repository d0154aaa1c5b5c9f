//! Weekday affinity assignment.
//!
//! Gives every team without an affinity a block of recurring cooking
//! weekdays, round robin over the season's cooking weekdays.
//!
//! # Algorithm
//!
//! 1. Order the distinct cooking weekdays cyclically, starting at the
//!    weekday of `first_day` (cooking days {Mon, Wed, Fri} starting on a
//!    Wednesday give `[Wed, Fri, Mon]`).
//! 2. Teams that already own an affinity are left untouched.
//! 3. The `i`-th team without one gets the `k` weekdays starting at
//!    position `i * k`, wrapping around, where `k` is the consecutive
//!    cooking day quota. When there are more team blocks than weekdays,
//!    several teams share a weekday. A block never holds more than the
//!    `L` distinct cooking weekdays, so any `k >= L` owns all of them.
//!
//! # Complexity
//! O(n * L) where n = teams, L = cooking weekdays (at most 7).

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace, warn};

use crate::calendar::is_cooking_day;
use crate::models::{CookingTeam, WeekdaySelection};
use crate::rotation::{block_slice, rotate};

/// Fills in missing team affinities.
///
/// Returns the teams in input order. Teams with an affinity are cloned as
/// they are; re-running on the output changes nothing.
///
/// `first_day` must itself be a cooking day (see
/// [`find_first_cooking_day_in_dates`](crate::calendar::find_first_cooking_day_in_dates)).
/// Otherwise, or with a zero quota, the teams are returned unchanged.
pub fn assign_affinities(
    teams: &[CookingTeam],
    selection: &WeekdaySelection,
    consecutive_cooking_days: usize,
    first_day: NaiveDate,
) -> Vec<CookingTeam> {
    if !is_cooking_day(first_day, selection) {
        warn!(
            %first_day,
            "first day is not a cooking day, affinities left unchanged"
        );
        return teams.to_vec();
    }
    if consecutive_cooking_days == 0 {
        warn!("consecutive cooking days is zero, affinities left unchanged");
        return teams.to_vec();
    }

    let weekdays = selection.weekdays();
    // first_day is a cooking day, so its weekday is in the list.
    let start = weekdays
        .iter()
        .position(|&day| day == first_day.weekday())
        .unwrap_or(0);
    let ordered = rotate(&weekdays, start);
    let cycle = ordered.len();
    let block_len = consecutive_cooking_days.min(cycle);
    // (i * k) mod L without overflowing for huge quotas.
    let step = consecutive_cooking_days % cycle;

    let mut unassigned_index: usize = 0;
    let assigned: Vec<CookingTeam> = teams
        .iter()
        .map(|team| {
            if team.has_affinity() {
                return team.clone();
            }
            let offset = (unassigned_index % cycle) * step;
            let block = block_slice(&ordered, offset, block_len);
            unassigned_index += 1;
            let affinity = WeekdaySelection::from_weekdays(block);
            trace!(team = %team.id, ?affinity, "affinity assigned");
            team.clone().with_affinity(affinity)
        })
        .collect();

    debug!(
        teams = teams.len(),
        newly_assigned = unassigned_index,
        "affinity assignment finished"
    );
    assigned
}
