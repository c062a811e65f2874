//! Portfolio-level aggregation over a user's skill health.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::SkillCategory;
use crate::decay::{HealthStatus, SkillHealth};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub healthy: usize,
    pub warning: usize,
    pub critical: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: SkillCategory,
    pub count: usize,
    pub average_health: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_skills: usize,
    /// Mean current health score, rounded. Zero for an empty portfolio.
    pub overall_health: i64,
    pub status_counts: StatusCounts,
    /// Warning and critical skills, weakest first.
    pub at_risk: Vec<SkillHealth>,
    /// Largest categories first.
    pub categories: Vec<CategoryBreakdown>,
}

fn rounded_mean(total: i64, count: usize) -> i64 {
    if count == 0 {
        0
    } else {
        (total as f64 / count as f64).round() as i64
    }
}

/// Summarize the assessed skills of one user.
pub fn summarize(skills: &[(SkillCategory, SkillHealth)]) -> PortfolioSummary {
    let mut status_counts = StatusCounts::default();
    let mut per_category: BTreeMap<&'static str, (SkillCategory, usize, i64)> = BTreeMap::new();
    let mut total_health = 0;

    for (category, health) in skills {
        total_health += health.current_health_score;
        match health.status {
            HealthStatus::Healthy => status_counts.healthy += 1,
            HealthStatus::Warning => status_counts.warning += 1,
            HealthStatus::Critical => status_counts.critical += 1,
        }
        let entry = per_category
            .entry(category.label())
            .or_insert((*category, 0, 0));
        entry.1 += 1;
        entry.2 += health.current_health_score;
    }

    let mut at_risk: Vec<SkillHealth> = skills
        .iter()
        .filter(|(_, h)| h.status.is_at_risk())
        .map(|(_, h)| h.clone())
        .collect();
    at_risk.sort_by_key(|h| h.current_health_score);

    let mut categories: Vec<CategoryBreakdown> = per_category
        .into_values()
        .map(|(category, count, total)| CategoryBreakdown {
            category,
            count,
            average_health: rounded_mean(total, count),
        })
        .collect();
    // Stable sort keeps the alphabetical order from the map within equal counts.
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    PortfolioSummary {
        total_skills: skills.len(),
        overall_health: rounded_mean(total_health, skills.len()),
        status_counts,
        at_risk,
        categories,
    }
}
