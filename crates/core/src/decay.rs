//! Retention decay engine.
//!
//! A skill's health is its recorded proficiency decayed exponentially by the
//! number of whole days since it was last practiced:
//!
//! ```text
//! raw    = proficiency * e^(-decay_rate * days)
//! health = clamp(raw, 0, 100)
//! score  = round(health)
//! ```
//!
//! Status is classified on the clamped but *unrounded* health value, so a
//! raw health of 70.3 displays as 70 yet reports `healthy`.
//!
//! Nothing here is stored. Health is recomputed from the skill record and
//! the caller's `now` on every request.

use serde::Serialize;

use crate::types::{RecordId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Decay rate assigned to every new skill (fractional loss per day).
pub const DEFAULT_DECAY_RATE: f64 = 0.1;

/// Upper bound of the health scale.
pub const MAX_HEALTH: f64 = 100.0;

/// Health strictly above this is `healthy`.
pub const HEALTHY_THRESHOLD: f64 = 70.0;

/// Health strictly above this (and at most [`HEALTHY_THRESHOLD`]) is `warning`.
pub const WARNING_THRESHOLD: f64 = 40.0;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Coarse three-level classification of a health value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    /// Classify a clamped health value.
    ///
    /// NaN compares false against both thresholds and lands in `Critical`.
    pub fn from_score(health: f64) -> Self {
        if health > HEALTHY_THRESHOLD {
            Self::Healthy
        } else if health > WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// True for statuses the dashboard flags as "at risk".
    pub fn is_at_risk(self) -> bool {
        !matches!(self, Self::Healthy)
    }
}

// ---------------------------------------------------------------------------
// Pure functions
// ---------------------------------------------------------------------------

/// Whole days elapsed between `last_practiced` and `now`.
///
/// Partial days are truncated. A `last_practiced` in the future counts as
/// zero elapsed days rather than an error.
pub fn days_since(last_practiced: Timestamp, now: Timestamp) -> i64 {
    (now - last_practiced).num_days().max(0)
}

/// Decayed health clamped to `[0, 100]`, before rounding.
///
/// Never panics. A NaN result (e.g. NaN proficiency) becomes `0.0`; infinite
/// results clamp to the nearest bound.
pub fn decayed_health(proficiency: f64, decay_rate: f64, days: i64) -> f64 {
    let raw = proficiency * (-decay_rate * days as f64).exp();
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, MAX_HEALTH)
}

/// Decayed health rounded half away from zero to an integer score.
pub fn health_score(proficiency: f64, decay_rate: f64, days: i64) -> i64 {
    decayed_health(proficiency, decay_rate, days).round() as i64
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// The stored fields the engine reads from a skill record.
#[derive(Debug, Clone, Copy)]
pub struct RetentionInput<'a> {
    pub skill_id: RecordId,
    pub name: &'a str,
    pub proficiency: f64,
    pub decay_rate: f64,
    pub last_practiced: Timestamp,
}

/// Health of one skill at a point in time, as returned by the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillHealth {
    pub skill_id: RecordId,
    pub name: String,
    pub original_proficiency: f64,
    pub current_health_score: i64,
    pub days_since_last_practice: i64,
    pub status: HealthStatus,
}

/// Compute the health of a skill at `now`.
pub fn assess(input: RetentionInput<'_>, now: Timestamp) -> SkillHealth {
    let days = days_since(input.last_practiced, now);
    let health = decayed_health(input.proficiency, input.decay_rate, days);

    SkillHealth {
        skill_id: input.skill_id,
        name: input.name.to_string(),
        original_proficiency: input.proficiency,
        current_health_score: health.round() as i64,
        days_since_last_practice: days,
        status: HealthStatus::from_score(health),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap()
    }

    fn input(proficiency: f64, last_practiced: Timestamp) -> RetentionInput<'static> {
        RetentionInput {
            skill_id: RecordId::nil(),
            name: "Rust",
            proficiency,
            decay_rate: DEFAULT_DECAY_RATE,
            last_practiced,
        }
    }

    #[test]
    fn ten_days_without_practice_is_critical() {
        let health = assess(input(100.0, t0()), t0() + Duration::days(10));
        assert_eq!(health.current_health_score, 37);
        assert_eq!(health.days_since_last_practice, 10);
        assert_eq!(health.status, HealthStatus::Critical);
        assert_eq!(health.original_proficiency, 100.0);
    }

    #[test]
    fn one_day_without_practice_is_healthy() {
        let health = assess(input(100.0, t0()), t0() + Duration::days(1));
        assert_eq!(health.current_health_score, 90);
        assert_eq!(health.status, HealthStatus::Healthy);
    }

    #[test]
    fn partial_days_are_truncated() {
        let now = t0() + Duration::days(2) + Duration::hours(23);
        assert_eq!(days_since(t0(), now), 2);
        assert_eq!(days_since(t0(), t0() + Duration::hours(23)), 0);
    }

    #[test]
    fn no_elapsed_time_means_no_decay() {
        for p in [0.0, 12.4, 12.5, 50.0, 62.0, 99.5, 100.0] {
            assert_eq!(health_score(p, 0.3, 0), p.round() as i64, "p = {p}");
        }
    }

    #[test]
    fn health_stays_between_zero_and_proficiency() {
        for p in [0.0, 1.0, 35.5, 70.0, 100.0] {
            for rate in [0.01, 0.1, 0.5, 1.0] {
                for days in [0, 1, 7, 30, 365, 10_000] {
                    let h = decayed_health(p, rate, days);
                    assert!((0.0..=p).contains(&h), "p={p} rate={rate} days={days} h={h}");
                }
            }
        }
    }

    #[test]
    fn health_is_non_increasing_in_days() {
        let mut previous = decayed_health(88.0, 0.07, 0);
        for days in 1..400 {
            let next = decayed_health(88.0, 0.07, days);
            assert!(next <= previous, "day {days}: {next} > {previous}");
            previous = next;
        }
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(HealthStatus::from_score(71.0), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_score(70.0), HealthStatus::Warning);
        assert_eq!(HealthStatus::from_score(41.0), HealthStatus::Warning);
        assert_eq!(HealthStatus::from_score(40.0), HealthStatus::Critical);
        assert_eq!(HealthStatus::from_score(0.0), HealthStatus::Critical);
    }

    #[test]
    fn status_uses_unrounded_health() {
        // 70.3 rounds to 70 but is still above the healthy threshold.
        let health = assess(input(70.3, t0()), t0());
        assert_eq!(health.current_health_score, 70);
        assert_eq!(health.status, HealthStatus::Healthy);
    }

    #[test]
    fn proficiency_above_ceiling_is_clamped() {
        let health = assess(input(130.0, t0()), t0() + Duration::days(1));
        assert_eq!(health.current_health_score, 100);
        assert_eq!(health.original_proficiency, 130.0);
    }

    #[test]
    fn future_last_practiced_counts_as_zero_days() {
        let health = assess(input(80.0, t0() + Duration::days(3)), t0());
        assert_eq!(health.days_since_last_practice, 0);
        assert_eq!(health.current_health_score, 80);
    }

    #[test]
    fn non_finite_inputs_do_not_panic() {
        assert_eq!(decayed_health(f64::NAN, 0.1, 5), 0.0);
        assert_eq!(decayed_health(50.0, f64::NAN, 5), 0.0);
        assert_eq!(decayed_health(f64::INFINITY, 0.1, 5), 100.0);
        assert_eq!(decayed_health(f64::NEG_INFINITY, 0.1, 5), 0.0);
        assert_eq!(HealthStatus::from_score(f64::NAN), HealthStatus::Critical);
    }

    #[test]
    fn assessment_is_idempotent() {
        let now = t0() + Duration::days(4);
        assert_eq!(assess(input(66.0, t0()), now), assess(input(66.0, t0()), now));
    }

    #[test]
    fn decay_walks_down_through_every_status() {
        let statuses: Vec<_> = [0, 4, 10]
            .into_iter()
            .map(|d| assess(input(100.0, t0()), t0() + Duration::days(d)).status)
            .collect();
        assert_eq!(
            statuses,
            vec![HealthStatus::Healthy, HealthStatus::Warning, HealthStatus::Critical]
        );
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let health = assess(input(100.0, t0()), t0() + Duration::days(10));
        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["currentHealthScore"], 37);
        assert_eq!(json["daysSinceLastPractice"], 10);
        assert_eq!(json["status"], "critical");
        assert!(json["skillId"].is_string());
    }
}
