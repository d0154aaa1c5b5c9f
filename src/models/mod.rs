//! Cooking-season domain models.
//!
//! Provides the value types every scheduling stage consumes and produces.
//! All of them are plain data: no stage keeps state between calls.
//!
//! # Domain Mappings
//!
//! | cooking-rota | Meaning |
//! |--------------|---------|
//! | WeekdaySelection | Cooking days of a season, or a team's affinity |
//! | DateRange / HolidayRange | Season span and blocked periods |
//! | CookingTeam | A household group that cooks |
//! | DinnerEvent | A dinner that needs (or has) a cooking team |
//! | CalendarSlot | A dinner or a holiday gap, for quota bookkeeping |
//! | Roster | Rotation order of teams |

mod calendar;
mod schedule;
mod season;
mod team;
mod weekday;

pub use calendar::{is_holiday, DateRange, HolidayRange};
pub use schedule::{CalendarSlot, DinnerEvent, Roster};
pub use season::SeasonConfig;
pub use team::CookingTeam;
pub use weekday::{cyclic_distance, WeekdaySelection, ALL_WEEKDAYS};
