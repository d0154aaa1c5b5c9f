//! Error types for the cooking-rota crate.

use chrono::NaiveDate;

/// Error type for fallible construction of season inputs.
///
/// The scheduling stages themselves are total functions; only building
/// the values they consume can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeasonError {
    /// Returned when a date range ends before it starts.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The requested first day.
        start: NaiveDate,
        /// The requested last day.
        end: NaiveDate,
    },

    /// Returned when the consecutive cooking day quota is zero.
    #[error("consecutive cooking days must be at least 1")]
    InvalidConsecutiveCookingDays,

    /// Returned when a season configuration cannot be parsed.
    #[error("invalid season config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for SeasonError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
