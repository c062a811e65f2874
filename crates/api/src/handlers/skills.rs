//! Handlers for skills: CRUD, retention health, practice events, forecasts
//! and the per-user portfolio summary.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use skillforge_core::analytics;
use skillforge_core::decay::SkillHealth;
use skillforge_core::error::CoreError;
use skillforge_core::forecast;
use skillforge_core::practice::{self, PracticeUpdate, QuizGrade, QuizOutcome};
use skillforge_core::types::RecordId;
use skillforge_core::validation::validate_user_id;
use skillforge_db::models::skill::{CreateSkill, MarkPracticed, Skill, UpdateSkill};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Load a skill or fail with `NotFound`.
pub(crate) async fn find_skill_or_404(state: &AppState, skill_id: RecordId) -> AppResult<Skill> {
    state
        .store
        .find_skill(skill_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Skill", skill_id)))
}

async fn apply_practice(
    state: &AppState,
    skill_id: RecordId,
    update: &PracticeUpdate,
) -> AppResult<Skill> {
    state
        .store
        .record_practice(skill_id, update, Utc::now())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Skill", skill_id)))
}

// ---------------------------------------------------------------------------
// POST /skills
// ---------------------------------------------------------------------------

/// Create a manually tracked skill.
pub async fn create_skill(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    let new_skill = input.into_new_skill(state.config.default_user_id.as_deref(), Utc::now())?;
    let skill = state.store.insert_skill(&new_skill).await?;

    tracing::info!(
        skill_id = %skill.skill_id,
        user_id = %skill.user_id,
        name = %skill.name,
        "Skill created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(skill))))
}

// ---------------------------------------------------------------------------
// GET /skills/user/{userId}
// ---------------------------------------------------------------------------

pub async fn list_user_skills(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let user_id = validate_user_id(&user_id)?;
    let skills = state.store.list_skills_for_user(&user_id).await?;
    Ok(Json(DataResponse::new(skills)))
}

// ---------------------------------------------------------------------------
// GET /skills/user/{userId}/summary
// ---------------------------------------------------------------------------

/// Portfolio analytics across every skill the user owns.
pub async fn user_summary(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let user_id = validate_user_id(&user_id)?;
    let skills = state.store.list_skills_for_user(&user_id).await?;

    let now = Utc::now();
    let assessed: Vec<_> = skills
        .iter()
        .map(|skill| (skill.category, skill.health_at(now)))
        .collect();

    Ok(Json(DataResponse::new(analytics::summarize(&assessed))))
}

// ---------------------------------------------------------------------------
// GET /skills/{skillId}
// ---------------------------------------------------------------------------

pub async fn get_skill(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<RecordId>,
) -> AppResult<impl IntoResponse> {
    let skill = find_skill_or_404(&state, skill_id).await?;
    Ok(Json(DataResponse::new(skill)))
}

// ---------------------------------------------------------------------------
// PUT /skills/{skillId}
// ---------------------------------------------------------------------------

/// Overwrite proficiency and last-practiced time. Last writer wins.
pub async fn update_skill(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<RecordId>,
    AppJson(input): AppJson<UpdateSkill>,
) -> AppResult<impl IntoResponse> {
    let update = practice::manual_update(input.proficiency, input.last_practiced, Utc::now())?;
    let skill = apply_practice(&state, skill_id, &update).await?;

    tracing::info!(
        skill_id = %skill_id,
        proficiency = skill.proficiency,
        "Skill updated",
    );

    Ok(Json(DataResponse::new(skill)))
}

// ---------------------------------------------------------------------------
// DELETE /skills/{skillId}
// ---------------------------------------------------------------------------

/// Delete a skill and its challenges.
pub async fn delete_skill(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<RecordId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete_skill(skill_id).await? {
        return Err(AppError::Core(CoreError::not_found("Skill", skill_id)));
    }

    tracing::info!(skill_id = %skill_id, "Skill deleted");

    Ok(Json(MessageResponse::new("Skill deleted successfully")))
}

// ---------------------------------------------------------------------------
// GET /skills/{skillId}/health
// ---------------------------------------------------------------------------

/// Current retention health, computed at request time.
pub async fn skill_health(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<RecordId>,
) -> AppResult<impl IntoResponse> {
    let skill = find_skill_or_404(&state, skill_id).await?;
    Ok(Json(DataResponse::new(skill.health_at(Utc::now()))))
}

// ---------------------------------------------------------------------------
// POST /skills/{skillId}/practice
// ---------------------------------------------------------------------------

/// Reset the decay clock. The body is optional; `{ "proficiency": n }`
/// also records a new proficiency.
pub async fn mark_practiced(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<RecordId>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input: MarkPracticed = if body.iter().all(u8::is_ascii_whitespace) {
        MarkPracticed::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?
    };

    let skill = find_skill_or_404(&state, skill_id).await?;
    let update = practice::mark_practiced(skill.proficiency, input.proficiency, Utc::now())?;
    let skill = apply_practice(&state, skill_id, &update).await?;

    tracing::info!(skill_id = %skill_id, "Skill marked as practiced");

    Ok(Json(DataResponse::new(skill)))
}

// ---------------------------------------------------------------------------
// POST /skills/{skillId}/quiz-results
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultResponse {
    pub skill: Skill,
    pub percentage: f64,
    pub boost: f64,
    pub grade: QuizGrade,
    pub health: SkillHealth,
}

/// Apply a finished quiz: boost proficiency and reset the decay clock.
pub async fn record_quiz_result(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<RecordId>,
    AppJson(outcome): AppJson<QuizOutcome>,
) -> AppResult<impl IntoResponse> {
    let percentage = outcome.percentage()?;
    let skill = find_skill_or_404(&state, skill_id).await?;

    let now = Utc::now();
    let update = practice::complete_quiz(skill.proficiency, percentage, now)?;
    // Reported uncapped; only the stored proficiency is capped.
    let boost = practice::quiz_boost(percentage);
    let skill = apply_practice(&state, skill_id, &update).await?;

    tracing::info!(
        skill_id = %skill_id,
        percentage,
        boost,
        proficiency = skill.proficiency,
        "Quiz result recorded",
    );

    let health = skill.health_at(now);
    Ok(Json(DataResponse::new(QuizResultResponse {
        skill,
        percentage,
        boost,
        grade: QuizGrade::from_percentage(percentage),
        health,
    })))
}

// ---------------------------------------------------------------------------
// GET /skills/{skillId}/forecast
// ---------------------------------------------------------------------------

/// Display-estimate history and projection around the current health score.
pub async fn skill_forecast(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<RecordId>,
) -> AppResult<impl IntoResponse> {
    let skill = find_skill_or_404(&state, skill_id).await?;
    let now = Utc::now();
    let health = skill.health_at(now);
    Ok(Json(DataResponse::new(forecast::build(
        health.current_health_score,
        now.date_naive(),
    ))))
}
