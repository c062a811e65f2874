pub mod categories;
pub mod challenges;
pub mod health;
pub mod integrations;
pub mod quiz;
pub mod skills;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                  list categories
///
/// /skills                                      create
/// /skills/user/{userId}                        list for user
/// /skills/user/{userId}/summary                portfolio analytics
/// /skills/{skillId}                            get, update, delete
/// /skills/{skillId}/health                     retention health
/// /skills/{skillId}/practice                   mark practiced (POST)
/// /skills/{skillId}/quiz-results               apply quiz boost (POST)
/// /skills/{skillId}/forecast                   display-estimate forecast
///
/// /challenges                                  generate + store (POST)
/// /challenges/skill/{skillId}                  list for skill
///
/// /quiz/{skillName}?numQuestions=n             generate quiz
///
/// /integrations/github                         GitHub sync (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/skills", skills::router())
        .nest("/challenges", challenges::router())
        .nest("/quiz", quiz::router())
        .nest("/integrations", integrations::router())
}
