//! Quota-based event assignment.
//!
//! # Algorithm
//!
//! Walk the slots in chronological order with a roster position and a
//! quota counter:
//! 1. A pre-assigned event keeps its team but consumes quota.
//! 2. A holiday slot consumes quota and is dropped from the output.
//! 3. Any other event gets the team at the current roster position.
//! 4. After `k` consumed slots the roster advances by one, wrapping.
//!
//! Slots on weekdays that are not cooking days are passed through
//! untouched and consume no quota.
//!
//! # Complexity
//! O(s) where s = slots.

use tracing::{debug, trace, warn};

use crate::calendar::is_cooking_day;
use crate::models::{CalendarSlot, DinnerEvent, Roster, WeekdaySelection};

/// Assigns roster teams to unassigned events.
///
/// `slots` must be ascending by date and include holiday slots (see
/// [`chronological_slots`](crate::calendar::chronological_slots)). Returns
/// the events in slot order; holiday slots are never returned.
///
/// With an empty roster no event is assigned. A zero quota is treated
/// as one.
pub fn assign_teams_to_events(
    roster: &Roster,
    selection: &WeekdaySelection,
    consecutive_cooking_days: usize,
    slots: &[CalendarSlot],
) -> Vec<DinnerEvent> {
    let quota = consecutive_cooking_days.max(1);
    let mut roster_index = 0;
    let mut quota_used = 0;
    let mut assigned = 0;

    if roster.is_empty() && !slots.is_empty() {
        warn!(slots = slots.len(), "empty roster, no events assigned");
    }

    let mut events = Vec::with_capacity(slots.len());
    for slot in slots {
        if !is_cooking_day(slot.date(), selection) {
            trace!(date = %slot.date(), "slot is not on a cooking day, skipped");
            if let CalendarSlot::Event(event) = slot {
                events.push(event.clone());
            }
            continue;
        }

        match slot {
            CalendarSlot::Holiday(date) => {
                trace!(%date, "holiday slot consumes quota");
            }
            CalendarSlot::Event(event) if event.is_assigned() => {
                events.push(event.clone());
            }
            CalendarSlot::Event(event) => {
                let mut event = event.clone();
                if let Some(team_id) = roster.get(roster_index) {
                    trace!(date = %event.date, team = team_id, "event assigned");
                    event.cooking_team_id = Some(team_id.to_string());
                    assigned += 1;
                }
                events.push(event);
            }
        }

        quota_used += 1;
        if quota_used == quota {
            quota_used = 0;
            if !roster.is_empty() {
                roster_index = (roster_index + 1) % roster.len();
            }
        }
    }

    debug!(
        slots = slots.len(),
        events = events.len(),
        assigned,
        "event assignment finished"
    );
    events
}
