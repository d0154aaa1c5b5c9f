//! Randomized invariant checks over seeded inputs.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use cooking_rota::affinity::assign_affinities;
use cooking_rota::calendar::{
    chronological_slots, compute_cooking_dates, find_first_cooking_day_in_dates,
};
use cooking_rota::models::{
    CalendarSlot, CookingTeam, DateRange, DinnerEvent, HolidayRange, Roster, WeekdaySelection,
    ALL_WEEKDAYS,
};
use cooking_rota::roster::create_sorted_affinities_to_teams_map;
use cooking_rota::roster::create_team_roster;
use cooking_rota::rotation::rotate;
use cooking_rota::scheduler::assign_teams_to_events;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const CASES: usize = 200;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_selection(rng: &mut StdRng) -> WeekdaySelection {
    ALL_WEEKDAYS
        .iter()
        .copied()
        .filter(|_| rng.random_bool(0.5))
        .collect()
}

fn random_nonempty_selection(rng: &mut StdRng) -> WeekdaySelection {
    let selection = random_selection(rng);
    if selection.is_empty() {
        selection.with(ALL_WEEKDAYS[rng.random_range(0..7)])
    } else {
        selection
    }
}

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn random_range(rng: &mut StdRng) -> DateRange {
    let start = base() + Days::new(rng.random_range(0..300));
    let end = start + Days::new(rng.random_range(0..120));
    DateRange::new(start, end).unwrap()
}

fn random_holidays(rng: &mut StdRng) -> Vec<HolidayRange> {
    (0..rng.random_range(0..4))
        .map(|_| {
            let start = base() + Days::new(rng.random_range(0..400));
            let end = start + Days::new(rng.random_range(0..14));
            HolidayRange::new(start, end).unwrap()
        })
        .collect()
}

fn teams(n: usize) -> Vec<CookingTeam> {
    (0..n)
        .map(|i| CookingTeam::new(format!("T{i}")).with_name(format!("Team {i:02}")))
        .collect()
}

#[test]
fn cooking_dates_are_sorted_unique_in_range_and_not_holidays() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..CASES {
        let selection = random_selection(&mut rng);
        let range = random_range(&mut rng);
        let holidays = random_holidays(&mut rng);

        let dates = compute_cooking_dates(&selection, &range, &holidays);

        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        for date in &dates {
            assert!(range.contains(*date));
            assert!(selection.contains(date.weekday()));
            assert!(holidays.iter().all(|h| !h.contains(*date)));
        }
    }
}

#[test]
fn empty_selection_never_yields_dates() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..CASES {
        let range = random_range(&mut rng);
        let holidays = random_holidays(&mut rng);
        assert!(compute_cooking_dates(&WeekdaySelection::none(), &range, &holidays).is_empty());
    }
}

#[test]
fn affinity_assignment_is_idempotent() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..CASES {
        let selection = random_nonempty_selection(&mut rng);
        let range = random_range(&mut rng);
        let k = rng.random_range(1..5);
        let dates: Vec<NaiveDate> = range.iter_days().collect();
        let Some(first_day) = find_first_cooking_day_in_dates(&selection, &dates) else {
            continue;
        };

        let mut input = teams(rng.random_range(0..9));
        // Some teams already own an affinity.
        for team in input.iter_mut() {
            if rng.random_bool(0.3) {
                team.affinity = Some(random_nonempty_selection(&mut rng));
            }
        }

        let once = assign_affinities(&input, &selection, k, first_day);
        let twice = assign_affinities(&once, &selection, k, first_day);
        assert_eq!(once, twice);

        for (before, after) in input.iter().zip(&once) {
            if before.affinity.is_some() {
                assert_eq!(before, after);
            }
            assert!(after.affinity.is_some());
        }
    }
}

#[test]
fn affinity_blocks_repeat_with_period_l_over_k() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..CASES {
        let selection = random_nonempty_selection(&mut rng);
        let l = selection.len();
        let divisors: Vec<usize> = (1..=l).filter(|k| l % k == 0).collect();
        let k = divisors[rng.random_range(0..divisors.len())];
        let first_weekday = selection.weekdays()[rng.random_range(0..l)];
        let first_day = (0..7)
            .map(|offset| base() + Days::new(offset))
            .find(|date| date.weekday() == first_weekday)
            .unwrap();

        let n = 2 * l / k + 1;
        let out = assign_affinities(&teams(n), &selection, k, first_day);

        // Each block of k consecutive distinct weekdays has exactly k days.
        for team in &out {
            assert_eq!(team.affinity.unwrap().len(), k);
        }
        for i in 0..(n - l / k) {
            assert_eq!(out[i].affinity, out[i + l / k].affinity);
        }
        // The first team starts on the first day's weekday.
        assert!(out[0].affinity.unwrap().contains(first_weekday));
    }
}

#[test]
fn roster_emits_every_affined_team_once_and_interleaves() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..CASES {
        let start = ALL_WEEKDAYS[rng.random_range(0..7)];
        let mut input = teams(rng.random_range(0..12));
        for team in input.iter_mut() {
            if rng.random_bool(0.85) {
                team.affinity = Some(random_nonempty_selection(&mut rng));
            }
        }

        let roster = create_team_roster(start, &input);
        let expected: HashSet<&str> = input
            .iter()
            .filter(|t| t.affinity.is_some())
            .map(|t| t.id.as_str())
            .collect();
        let emitted: Vec<&str> = roster.iter().collect();
        let unique: HashSet<&str> = emitted.iter().copied().collect();
        assert_eq!(emitted.len(), unique.len());
        assert_eq!(unique, expected);

        let groups = create_sorted_affinities_to_teams_map(&input, start);
        let width = groups.len();
        let position: HashMap<&str, usize> =
            emitted.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        // Round r holds the r-th team of every group that still has one,
        // and every team of round r sits within the first (r + 1) * width.
        let mut cursor = 0;
        for round in 0..groups.max_group_size() {
            let members: Vec<&str> = groups
                .iter()
                .filter_map(|(_, members)| members.get(round))
                .map(|team| team.id.as_str())
                .collect();
            assert_eq!(&emitted[cursor..cursor + members.len()], &members[..]);
            cursor += members.len();
            for id in &members {
                assert!(position[*id] < (round + 1) * width);
            }
        }
        assert_eq!(cursor, emitted.len());

        // Two successive teams of one group have fewer than `width` others between them.
        for (_, members) in groups.iter() {
            for pair in members.windows(2) {
                let gap = position[pair[1].id.as_str()] - position[pair[0].id.as_str()] - 1;
                assert!(gap < width);
            }
        }
    }
}

#[test]
fn quota_bookkeeping_matches_reference_walk() {
    let mut rng = StdRng::seed_from_u64(6);
    let selection = WeekdaySelection::all();
    for _ in 0..CASES {
        let roster: Roster = (0..rng.random_range(1..6)).map(|i| format!("R{i}")).collect();
        let k = rng.random_range(1..4);
        let slots: Vec<CalendarSlot> = (0..rng.random_range(0..30))
            .map(|offset| {
                let date = base() + Days::new(offset);
                match rng.random_range(0..10) {
                    0..=1 => CalendarSlot::Holiday(date),
                    2 => CalendarSlot::Event(DinnerEvent::on(date).with_team("PRE")),
                    _ => CalendarSlot::Event(DinnerEvent::on(date)),
                }
            })
            .collect();

        let events = assign_teams_to_events(&roster, &selection, k, &slots);

        let event_slots: Vec<(usize, &CalendarSlot)> = slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_holiday())
            .collect();
        assert_eq!(events.len(), event_slots.len());

        for ((position, slot), event) in event_slots.into_iter().zip(&events) {
            let CalendarSlot::Event(input) = slot else {
                unreachable!()
            };
            if input.is_assigned() {
                assert_eq!(event, input);
            } else {
                let expected = roster.get((position / k) % roster.len()).unwrap();
                assert_eq!(event.cooking_team_id.as_deref(), Some(expected));
            }
        }
    }
}

#[test]
fn slots_cover_events_and_holiday_gaps() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let selection = random_nonempty_selection(&mut rng);
        let range = random_range(&mut rng);
        let holidays = random_holidays(&mut rng);
        let events: Vec<DinnerEvent> = compute_cooking_dates(&selection, &range, &holidays)
            .into_iter()
            .map(DinnerEvent::on)
            .collect();

        let slots = chronological_slots(&events, &selection, &range, &holidays);
        let all_cooking_weekdays = range
            .iter_days()
            .filter(|date| selection.contains(date.weekday()))
            .count();

        assert_eq!(slots.len(), all_cooking_weekdays);
        assert!(slots.windows(2).all(|w| w[0].date() < w[1].date()));
    }
}

#[test]
fn rotate_keeps_cyclic_order() {
    let days: Vec<Weekday> = ALL_WEEKDAYS.to_vec();
    for start in 0..14 {
        let rotated = rotate(&days, start);
        assert_eq!(rotated.len(), 7);
        assert_eq!(rotated[0], days[start % 7]);
        for pair in rotated.windows(2) {
            assert_eq!(pair[0].succ(), pair[1]);
        }
    }
}
