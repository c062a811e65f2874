//! Handler for quiz generation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use skillforge_ai::content::clamp_question_count;
use skillforge_core::validation::validate_skill_name;

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizParams {
    /// Parsed leniently: anything that is not an integer means "default".
    pub num_questions: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /quiz/{skillName}
// ---------------------------------------------------------------------------

/// Multiple-choice questions for a skill. Always succeeds for a valid name;
/// provider problems fall back to the static question bank.
pub async fn generate_quiz(
    State(state): State<AppState>,
    AppPath(skill_name): AppPath<String>,
    AppQuery(params): AppQuery<QuizParams>,
) -> AppResult<impl IntoResponse> {
    let skill_name = validate_skill_name(&skill_name)?;
    let requested = params
        .num_questions
        .as_deref()
        .and_then(|n| n.trim().parse::<i64>().ok());
    let count = clamp_question_count(requested);

    let quiz = state.content.quiz(&skill_name, count).await;

    tracing::info!(
        skill = %skill_name,
        questions = quiz.content.len(),
        origin = quiz.origin.as_str(),
        "Quiz generated",
    );

    Ok(Json(DataResponse::new(quiz.content)))
}
