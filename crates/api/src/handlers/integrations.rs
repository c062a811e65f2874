//! Handler for GitHub sync.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use skillforge_core::category::SkillCategory;
use skillforge_core::decay::DEFAULT_DECAY_RATE;
use skillforge_core::error::CoreError;
use skillforge_core::practice::MAX_PROFICIENCY;
use skillforge_core::types::{RecordId, Timestamp};
use skillforge_core::validation::{validate_skill_name, validate_user_id};
use skillforge_db::models::skill::{NewSkill, Skill, SkillSource};
use skillforge_github::DetectedSkill;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSyncRequest {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub github_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSyncResponse {
    pub skills_detected: usize,
    pub skills: Vec<Skill>,
    pub repositories: serde_json::Value,
    pub language_stats: serde_json::Value,
}

/// Clamp scanner-reported proficiency into the stored range.
fn clamp_detected_proficiency(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, MAX_PROFICIENCY)
    }
}

/// Build a record for a detected skill, or `None` if its name is unusable.
fn detected_to_new_skill(user_id: &str, detected: &DetectedSkill, now: Timestamp) -> Option<NewSkill> {
    let name = validate_skill_name(&detected.name).ok()?;
    Some(NewSkill {
        skill_id: RecordId::new_v4(),
        user_id: user_id.to_string(),
        name,
        category: SkillCategory::from_external(detected.category.as_deref()),
        proficiency: clamp_detected_proficiency(detected.proficiency),
        last_practiced: detected.last_practiced.unwrap_or(now),
        decay_rate: DEFAULT_DECAY_RATE,
        source: SkillSource::Github,
        created_at: now,
    })
}

// ---------------------------------------------------------------------------
// POST /integrations/github
// ---------------------------------------------------------------------------

/// Scan a GitHub account and insert every detected skill as a new record.
///
/// There is no de-duplication against existing skills: syncing twice
/// inserts twice.
pub async fn sync_github(
    State(state): State<AppState>,
    AppJson(input): AppJson<GithubSyncRequest>,
) -> AppResult<impl IntoResponse> {
    let username = input
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| CoreError::Validation("GitHub username required".to_string()))?;

    let user_id = input
        .user_id
        .as_deref()
        .or(state.config.default_user_id.as_deref())
        .ok_or_else(|| CoreError::Validation("userId is required".to_string()))?;
    let user_id = validate_user_id(user_id)?;

    let scanner = state
        .scanner
        .as_ref()
        .ok_or_else(|| AppError::Upstream("GitHub sync is not configured".to_string()))?;

    let report = scanner
        .scan(username, input.github_token.as_deref())
        .await?;

    let now = Utc::now();
    let mut saved = Vec::with_capacity(report.skills.len());
    for detected in &report.skills {
        let Some(new_skill) = detected_to_new_skill(&user_id, detected, now) else {
            tracing::warn!(name = %detected.name, "Skipping detected skill with invalid name");
            continue;
        };
        saved.push(state.store.insert_skill(&new_skill).await?);
    }

    tracing::info!(
        user_id = %user_id,
        username = %username,
        skills_detected = saved.len(),
        "GitHub sync completed",
    );

    Ok(Json(DataResponse::new(GithubSyncResponse {
        skills_detected: saved.len(),
        skills: saved,
        repositories: report.repositories,
        language_stats: report.language_stats,
    })))
}
