//! Event assignment and the season pipeline.
//!
//! Provides the quota-based event assigner, a scheduler that chains the
//! calendar, affinity, roster and assignment stages for one season, and
//! rotation fairness metrics.
//!
//! # Algorithm
//!
//! `assign_teams_to_events` walks the chronological slots and hands each
//! roster team a block of `consecutive_cooking_days` slots. Holidays and
//! pre-assigned events use up quota without receiving a team.
//!
//! # KPI
//!
//! `RotationKpi` reports dinners per team, load spread, unassigned events
//! and idle roster teams.

mod assigner;
mod kpi;
mod season;

pub use assigner::assign_teams_to_events;
pub use kpi::RotationKpi;
pub use season::{SeasonPlan, SeasonScheduler};
