//! Display-estimate retention curves for charts.
//!
//! These are deliberately simple linear approximations seeded from the
//! engine's current health score. They are for rendering only and are never
//! written back to a skill's stored proficiency.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Days of reconstructed history before today.
pub const HISTORY_DAYS: i64 = 90;

/// Days projected after today.
pub const PROJECTION_DAYS: i64 = 90;

/// Retention points lost per day in the projection.
pub const LINEAR_DAILY_LOSS: f64 = 0.5;

/// Label attached to every forecast payload.
pub const DISPLAY_ESTIMATE: &str = "display_estimate";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub retention: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub kind: &'static str,
    pub current_health_score: i64,
    pub history: Vec<ForecastPoint>,
    pub projection: Vec<ForecastPoint>,
}

/// Reconstructed history: a straight ramp from 100 down to `current`,
/// ending on `today`.
pub fn history(current: f64, today: NaiveDate) -> Vec<ForecastPoint> {
    (0..=HISTORY_DAYS)
        .rev()
        .map(|days_ago| {
            let progress = (HISTORY_DAYS - days_ago) as f64 / HISTORY_DAYS as f64;
            let retention = current.max(100.0 - progress * (100.0 - current));
            ForecastPoint {
                date: today - Duration::days(days_ago),
                retention: retention.round() as i64,
            }
        })
        .collect()
}

/// Projection without practice, starting the day after `today`.
pub fn projection(current: f64, today: NaiveDate) -> Vec<ForecastPoint> {
    (1..=PROJECTION_DAYS)
        .map(|day| {
            let retention = (current - day as f64 * LINEAR_DAILY_LOSS).max(0.0);
            ForecastPoint {
                date: today + Duration::days(day),
                retention: retention.round() as i64,
            }
        })
        .collect()
}

pub fn build(current_health_score: i64, today: NaiveDate) -> Forecast {
    let current = current_health_score as f64;
    Forecast {
        kind: DISPLAY_ESTIMATE,
        current_health_score,
        history: history(current, today),
        projection: projection(current, today),
    }
}
