use axum::routing::get;
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// Mounted at `/quiz`.
///
/// ```text
/// GET    /{skillName}        -> generate_quiz
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{skill_name}", get(quiz::generate_quiz))
}
