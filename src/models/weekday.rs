//! Weekday selection model.
//!
//! A season declares which weekdays are cooking days; a team's affinity
//! declares which weekdays it owns. Both are a [`WeekdaySelection`]: exactly
//! seven boolean flags, indexed Monday first.
//!
//! # Serialization
//! Serialized as an object with the seven keys `monday` … `sunday`.
//! All seven keys are required when deserializing.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// All weekdays, Monday first.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Cyclic distance (0..=6) walking forward from `from` to `to`.
///
/// `cyclic_distance(Wed, Mon) == 5`.
#[inline]
pub fn cyclic_distance(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7
}

/// Seven "is cooking day" flags, one per weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WeekdayFlags", into = "WeekdayFlags")]
pub struct WeekdaySelection {
    flags: [bool; 7],
}

impl WeekdaySelection {
    /// Selection with no weekday flagged.
    pub fn none() -> Self {
        Self { flags: [false; 7] }
    }

    /// Selection with every weekday flagged.
    pub fn all() -> Self {
        Self { flags: [true; 7] }
    }

    /// Builds a selection from Monday-first flags.
    pub fn from_flags(flags: [bool; 7]) -> Self {
        Self { flags }
    }

    /// Builds a selection flagging the given weekdays. Repeats collapse.
    pub fn from_weekdays<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        days.into_iter().fold(Self::none(), Self::with)
    }

    /// Flags a weekday.
    pub fn with(mut self, day: Weekday) -> Self {
        self.set(day, true);
        self
    }

    /// Sets the flag of a weekday.
    pub fn set(&mut self, day: Weekday, value: bool) {
        self.flags[day.num_days_from_monday() as usize] = value;
    }

    /// Whether `day` is flagged.
    #[inline]
    pub fn contains(&self, day: Weekday) -> bool {
        self.flags[day.num_days_from_monday() as usize]
    }

    /// Flagged weekdays, Monday first.
    pub fn weekdays(&self) -> Vec<Weekday> {
        ALL_WEEKDAYS
            .iter()
            .copied()
            .filter(|&d| self.contains(d))
            .collect()
    }

    /// Number of flagged weekdays.
    pub fn len(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Whether no weekday is flagged.
    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }

    /// Monday-first flags.
    pub fn flags(&self) -> [bool; 7] {
        self.flags
    }

    /// The flagged weekday closest to `start` walking forward, and its distance.
    ///
    /// Returns `None` for an empty selection.
    pub fn earliest_from(&self, start: Weekday) -> Option<(Weekday, u32)> {
        (0..7u32)
            .map(|offset| {
                let day = ALL_WEEKDAYS[((start.num_days_from_monday() + offset) % 7) as usize];
                (day, offset)
            })
            .find(|&(day, _)| self.contains(day))
    }

    /// Whether every flagged weekday here is also flagged in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.flags
            .iter()
            .zip(other.flags.iter())
            .all(|(&mine, &theirs)| !mine || theirs)
    }
}

impl FromIterator<Weekday> for WeekdaySelection {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::from_weekdays(iter)
    }
}

/// Wire shape of a [`WeekdaySelection`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WeekdayFlags {
    monday: bool,
    tuesday: bool,
    wednesday: bool,
    thursday: bool,
    friday: bool,
    saturday: bool,
    sunday: bool,
}

impl From<WeekdayFlags> for WeekdaySelection {
    fn from(w: WeekdayFlags) -> Self {
        Self::from_flags([
            w.monday,
            w.tuesday,
            w.wednesday,
            w.thursday,
            w.friday,
            w.saturday,
            w.sunday,
        ])
    }
}

impl From<WeekdaySelection> for WeekdayFlags {
    fn from(s: WeekdaySelection) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = s.flags;
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}
