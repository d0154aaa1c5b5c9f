//! Input validation for season scheduling.
//!
//! Checks structural integrity of a season config and its teams before
//! scheduling. The scheduling stages accept any input; these checks tell
//! an administrator why a schedule might look wrong. Detects:
//! - Duplicate team IDs and empty team names
//! - Affinities that are empty or lie outside the cooking days
//! - A zero consecutive cooking day quota
//! - Holidays entirely outside the season

use std::collections::HashSet;

use crate::models::{CookingTeam, SeasonConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two teams share the same ID.
    DuplicateId,
    /// A team has an empty name.
    EmptyName,
    /// A team owns an affinity with no weekday.
    EmptyAffinity,
    /// A team's affinity includes a weekday without dinners.
    AffinityOutsideCookingDays,
    /// The consecutive cooking day quota is zero.
    InvalidConsecutiveCookingDays,
    /// The season has no cooking weekday.
    NoCookingDays,
    /// A holiday does not touch the season.
    HolidayOutsideSeason,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a season config together with its teams.
///
/// Checks:
/// 1. The quota is at least one day
/// 2. At least one weekday is a cooking day
/// 3. Every holiday overlaps the season
/// 4. No duplicate team IDs
/// 5. No empty team names
/// 6. Every affinity is non-empty and within the cooking days
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_season(config: &SeasonConfig, teams: &[CookingTeam]) -> ValidationResult {
    let mut errors = Vec::new();

    if config.consecutive_cooking_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConsecutiveCookingDays,
            "Consecutive cooking days must be at least 1",
        ));
    }

    if config.cooking_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoCookingDays,
            "Season has no cooking days",
        ));
    }

    for holiday in &config.holidays {
        if !holiday.range.overlaps(&config.season) {
            errors.push(ValidationError::new(
                ValidationErrorKind::HolidayOutsideSeason,
                format!(
                    "Holiday {}..{} lies outside season {}..{}",
                    holiday.range.start(),
                    holiday.range.end(),
                    config.season.start(),
                    config.season.end()
                ),
            ));
        }
    }

    errors.extend(validate_teams(config, teams));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_teams(config: &SeasonConfig, teams: &[CookingTeam]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut team_ids = HashSet::new();

    for team in teams {
        if !team_ids.insert(team.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", team.id),
            ));
        }

        if team.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Team '{}' has no name", team.id),
            ));
        }

        let Some(affinity) = &team.affinity else {
            continue;
        };
        if affinity.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyAffinity,
                format!("Team '{}' has an affinity without weekdays", team.id),
            ));
        } else if !affinity.is_subset_of(&config.cooking_days) {
            errors.push(ValidationError::new(
                ValidationErrorKind::AffinityOutsideCookingDays,
                format!(
                    "Team '{}' owns {:?}, cooking days are {:?}",
                    team.id,
                    affinity.weekdays(),
                    config.cooking_days.weekdays()
                ),
            ));
        }
    }

    errors
}
