//! Practice transitions: the events that reset a skill's decay clock.
//!
//! None of these call the decay engine. They produce the new stored
//! `proficiency` / `last_practiced` pair, and the next health query starts
//! decaying from there.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::validation::validate_proficiency;

/// Fraction of the quiz percentage added to proficiency on completion.
pub const QUIZ_BOOST_FACTOR: f64 = 0.15;

/// Write-time ceiling for stored proficiency.
pub const MAX_PROFICIENCY: f64 = 100.0;

/// Percentage at or above which a quiz counts as excellent.
pub const EXCELLENT_PERCENTAGE: f64 = 80.0;

/// Percentage at or above which a quiz counts as good.
pub const GOOD_PERCENTAGE: f64 = 60.0;

/// New stored values after a practice event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PracticeUpdate {
    pub proficiency: f64,
    pub last_practiced: Timestamp,
}

/// Result band shown after a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizGrade {
    Excellent,
    Good,
    KeepPracticing,
}

impl QuizGrade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= EXCELLENT_PERCENTAGE {
            Self::Excellent
        } else if percentage >= GOOD_PERCENTAGE {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }
}

/// Proficiency points earned for a quiz percentage.
pub fn quiz_boost(percentage: f64) -> f64 {
    (percentage * QUIZ_BOOST_FACTOR).round()
}

/// Percentage score (rounded) for `correct` answers out of `total`.
pub fn tally_percentage(correct: u32, total: u32) -> Result<f64, CoreError> {
    if total == 0 {
        return Err(CoreError::Validation(
            "Quiz total must be at least 1".to_string(),
        ));
    }
    if correct > total {
        return Err(CoreError::Validation(format!(
            "Correct answers ({correct}) cannot exceed total ({total})"
        )));
    }
    Ok((f64::from(correct) / f64::from(total) * 100.0).round())
}

/// Validate a reported quiz percentage.
pub fn validate_percentage(percentage: f64) -> Result<(), CoreError> {
    if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
        return Err(CoreError::Validation(format!(
            "Quiz percentage must be between 0 and 100 (got {percentage})"
        )));
    }
    Ok(())
}

/// A reported quiz result: either a percentage or a raw tally.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QuizOutcome {
    Percentage { percentage: f64 },
    Tally { correct: u32, total: u32 },
}

impl QuizOutcome {
    /// The validated percentage this outcome represents.
    pub fn percentage(self) -> Result<f64, CoreError> {
        let percentage = match self {
            Self::Percentage { percentage } => percentage,
            Self::Tally { correct, total } => tally_percentage(correct, total)?,
        };
        validate_percentage(percentage)?;
        Ok(percentage)
    }
}

/// Apply a completed quiz: boost proficiency (capped) and reset the clock.
pub fn complete_quiz(
    proficiency: f64,
    percentage: f64,
    now: Timestamp,
) -> Result<PracticeUpdate, CoreError> {
    validate_percentage(percentage)?;
    let boosted = (proficiency + quiz_boost(percentage)).clamp(0.0, MAX_PROFICIENCY);
    Ok(PracticeUpdate {
        proficiency: boosted,
        last_practiced: now,
    })
}

/// Mark a skill as used now, optionally recording a new proficiency.
pub fn mark_practiced(
    proficiency: f64,
    new_proficiency: Option<f64>,
    now: Timestamp,
) -> Result<PracticeUpdate, CoreError> {
    let proficiency = match new_proficiency {
        Some(p) => {
            validate_proficiency(p)?;
            p
        }
        None => proficiency,
    };
    Ok(PracticeUpdate {
        proficiency,
        last_practiced: now,
    })
}

/// Overwrite proficiency and last-practiced time. Defaults the time to `now`.
pub fn manual_update(
    proficiency: f64,
    last_practiced: Option<Timestamp>,
    now: Timestamp,
) -> Result<PracticeUpdate, CoreError> {
    validate_proficiency(proficiency)?;
    Ok(PracticeUpdate {
        proficiency,
        last_practiced: last_practiced.unwrap_or(now),
    })
}
