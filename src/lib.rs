//! Cooking-season scheduling engine.
//!
//! Derives the cooking calendar of a community-dinner season and rotates
//! cooking teams over it: deterministic, idempotent, and a pure function
//! of the persisted season state.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `WeekdaySelection`, `DateRange`,
//!   `HolidayRange`, `CookingTeam`, `DinnerEvent`, `CalendarSlot`, `Roster`,
//!   `SeasonConfig`
//! - **`calendar`**: Cooking dates, cooking-day lookups, holiday slots
//! - **`rotation`**: Cyclic `rotate` / `block_slice` helpers
//! - **`affinity`**: Round-robin weekday affinity assignment
//! - **`roster`**: Affinity ordering and the interleaved team roster
//! - **`scheduler`**: Quota-based event assignment, season pipeline, KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, stray affinities)
//!
//! # Architecture
//!
//! Data flows one way: calendar → affinity → roster → event assignment.
//! No stage keeps state between calls; persisting the returned teams and
//! events is the caller's job. Writes of computed affinities must be
//! serialized by the caller so two concurrent runs do not both assign the
//! same "first" affinity.

pub mod affinity;
pub mod calendar;
pub mod error;
pub mod models;
pub mod roster;
pub mod rotation;
pub mod scheduler;
pub mod validation;

pub use error::SeasonError;
