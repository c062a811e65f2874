//! Route definitions for skills.
//!
//! Mounted at `/skills` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Skill routes.
///
/// ```text
/// POST   /                        -> create_skill
/// GET    /user/{userId}           -> list_user_skills
/// GET    /user/{userId}/summary   -> user_summary
/// GET    /{skillId}               -> get_skill
/// PUT    /{skillId}               -> update_skill
/// DELETE /{skillId}               -> delete_skill
/// GET    /{skillId}/health        -> skill_health
/// POST   /{skillId}/practice      -> mark_practiced
/// POST   /{skillId}/quiz-results  -> record_quiz_result
/// GET    /{skillId}/forecast      -> skill_forecast
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(skills::create_skill))
        .route("/user/{user_id}", get(skills::list_user_skills))
        .route("/user/{user_id}/summary", get(skills::user_summary))
        .route(
            "/{skill_id}",
            get(skills::get_skill)
                .put(skills::update_skill)
                .delete(skills::delete_skill),
        )
        .route("/{skill_id}/health", get(skills::skill_health))
        .route("/{skill_id}/practice", post(skills::mark_practiced))
        .route("/{skill_id}/quiz-results", post(skills::record_quiz_result))
        .route("/{skill_id}/forecast", get(skills::skill_forecast))
}
