//! Season pipeline.
//!
//! # Algorithm
//!
//! 1. Compute the season's cooking dates.
//! 2. Pick the first cooking weekday of the season as the rotation anchor.
//! 3. Fill in missing team affinities starting at that anchor.
//! 4. Build the interleaved roster from the week start.
//! 5. Merge events and holiday gaps into slots and assign teams.
//!
//! Every step is a pure function of the config and the passed-in state;
//! the scheduler itself holds only configuration.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::info;

use super::{assign_teams_to_events, RotationKpi};
use crate::affinity::assign_affinities;
use crate::calendar::{chronological_slots, compute_cooking_dates, next_cooking_day};
use crate::models::{CookingTeam, DinnerEvent, Roster, SeasonConfig};
use crate::roster::create_team_roster;

/// Result of a scheduling run.
#[derive(Debug, Clone)]
pub struct SeasonPlan {
    /// Teams with affinities filled in, input order.
    pub teams: Vec<CookingTeam>,
    /// Events with cooking teams filled in, chronological order.
    pub events: Vec<DinnerEvent>,
    /// Rotation order used.
    pub roster: Roster,
    /// Fairness of the assignment.
    pub kpi: RotationKpi,
}

/// Runs the scheduling stages for one season.
///
/// The roster groups are measured from the weekday of the season's first
/// cooking day, not from Monday. With a season starting on a Wednesday,
/// [`roster`](Self::roster) therefore differs from
/// `create_team_roster(Weekday::Mon, ..)`; use
/// [`with_week_start`](Self::with_week_start) to pin a weekday.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use cooking_rota::models::{CookingTeam, DateRange, SeasonConfig, WeekdaySelection};
/// use cooking_rota::scheduler::SeasonScheduler;
///
/// let config = SeasonConfig::new(
///     WeekdaySelection::from_weekdays([Weekday::Mon, Weekday::Wed, Weekday::Fri]),
///     DateRange::new(
///         NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
///     ).unwrap(),
/// );
/// let teams = vec![CookingTeam::new("1").with_name("Team1"), CookingTeam::new("2").with_name("Team2")];
///
/// let scheduler = SeasonScheduler::new(config);
/// let events = scheduler.dinner_events_for_season();
/// let plan = scheduler.schedule(&teams, &events);
/// assert_eq!(plan.events.len(), 12);
/// assert_eq!(plan.kpi.unassigned, 0);
/// ```
#[derive(Debug, Clone)]
pub struct SeasonScheduler {
    config: SeasonConfig,
    week_start: Option<Weekday>,
}

impl SeasonScheduler {
    /// Creates a scheduler for a season.
    pub fn new(config: SeasonConfig) -> Self {
        Self {
            config,
            week_start: None,
        }
    }

    /// Sets the weekday the roster groups are measured from.
    ///
    /// Defaults to the weekday of the season's first cooking day, so the
    /// first roster team owns the first slot.
    pub fn with_week_start(mut self, day: Weekday) -> Self {
        self.week_start = Some(day);
        self
    }

    /// Season configuration.
    pub fn config(&self) -> &SeasonConfig {
        &self.config
    }

    /// Cooking dates of the season, holidays excluded.
    pub fn cooking_dates(&self) -> Vec<NaiveDate> {
        compute_cooking_dates(
            &self.config.cooking_days,
            &self.config.season,
            &self.config.holidays,
        )
    }

    /// First cooking weekday within the season, holidays included.
    ///
    /// Holiday slots consume quota, so the rotation is anchored here even
    /// when no dinner takes place on this day.
    pub fn first_cooking_day(&self) -> Option<NaiveDate> {
        next_cooking_day(self.config.season.start(), &self.config.cooking_days)
            .filter(|&day| self.config.season.contains(day))
    }

    fn week_start(&self) -> Weekday {
        self.week_start
            .or_else(|| self.first_cooking_day().map(|day| day.weekday()))
            .unwrap_or(Weekday::Mon)
    }

    /// One unassigned dinner event per cooking date.
    pub fn dinner_events_for_season(&self) -> Vec<DinnerEvent> {
        self.cooking_dates()
            .into_iter()
            .map(DinnerEvent::on)
            .collect()
    }

    /// Fills in missing team affinities.
    ///
    /// Teams are returned unchanged when the season has no cooking day.
    pub fn plan_affinities(&self, teams: &[CookingTeam]) -> Vec<CookingTeam> {
        match self.first_cooking_day() {
            Some(first_day) => assign_affinities(
                teams,
                &self.config.cooking_days,
                self.config.consecutive_cooking_days,
                first_day,
            ),
            None => teams.to_vec(),
        }
    }

    /// Rotation roster of teams that own an affinity.
    pub fn roster(&self, teams: &[CookingTeam]) -> Roster {
        create_team_roster(self.week_start(), teams)
    }

    /// Assigns teams to the unassigned `events`.
    ///
    /// Teams without an affinity are not part of the rotation; call
    /// [`plan_affinities`](Self::plan_affinities) first or use
    /// [`schedule`](Self::schedule).
    pub fn assign_events(&self, teams: &[CookingTeam], events: &[DinnerEvent]) -> SeasonPlan {
        let roster = self.roster(teams);
        let slots = chronological_slots(
            events,
            &self.config.cooking_days,
            &self.config.season,
            &self.config.holidays,
        );
        let events = assign_teams_to_events(
            &roster,
            &self.config.cooking_days,
            self.config.consecutive_cooking_days,
            &slots,
        );
        let kpi = RotationKpi::calculate(&events, &roster);

        info!(
            teams = teams.len(),
            roster = roster.len(),
            events = events.len(),
            unassigned = kpi.unassigned,
            spread = kpi.spread(),
            "season events assigned"
        );

        SeasonPlan {
            teams: teams.to_vec(),
            events,
            roster,
            kpi,
        }
    }

    /// Fills in affinities, then assigns teams to events.
    pub fn schedule(&self, teams: &[CookingTeam], events: &[DinnerEvent]) -> SeasonPlan {
        let teams = self.plan_affinities(teams);
        self.assign_events(&teams, events)
    }
}
