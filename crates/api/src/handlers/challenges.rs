//! Handlers for practice challenges.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use skillforge_core::types::RecordId;
use skillforge_core::validation::{validate_proficiency, validate_skill_name};
use skillforge_db::models::challenge::{CreateChallenge, NewChallenge};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::handlers::skills::find_skill_or_404;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /challenges
// ---------------------------------------------------------------------------

/// Generate a challenge for a skill and store it.
///
/// `skillName` and `proficiency` default to the stored skill's values.
/// Generation failures are absorbed by the content service, so this only
/// fails on validation, a missing skill, or the store.
pub async fn create_challenge(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateChallenge>,
) -> AppResult<impl IntoResponse> {
    let skill = find_skill_or_404(&state, input.skill_id).await?;

    let skill_name = match input.skill_name.as_deref() {
        Some(name) => validate_skill_name(name)?,
        None => skill.name.clone(),
    };
    let proficiency = match input.proficiency {
        Some(p) => {
            validate_proficiency(p)?;
            p
        }
        None => skill.proficiency,
    };

    let generated = state.content.challenge(&skill_name, proficiency).await;
    let content = generated.content;

    let new_challenge = NewChallenge {
        challenge_id: RecordId::new_v4(),
        skill_id: skill.skill_id,
        title: content.title,
        description: content.description,
        requirements: content.requirements,
        estimated_time: content.estimated_time,
        difficulty: content.difficulty,
        created_at: Utc::now(),
    };
    let challenge = state.store.insert_challenge(&new_challenge).await?;

    tracing::info!(
        challenge_id = %challenge.challenge_id,
        skill_id = %challenge.skill_id,
        origin = generated.origin.as_str(),
        "Challenge created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(challenge))))
}

// ---------------------------------------------------------------------------
// GET /challenges/skill/{skillId}
// ---------------------------------------------------------------------------

/// Challenges for a skill, newest first. Unknown skills have none.
pub async fn list_skill_challenges(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<RecordId>,
) -> AppResult<impl IntoResponse> {
    let challenges = state.store.list_challenges_for_skill(skill_id).await?;
    Ok(Json(DataResponse::new(challenges)))
}
