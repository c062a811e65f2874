//! Route definitions for challenges.
//!
//! Mounted at `/challenges` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::challenges;
use crate::state::AppState;

/// ```text
/// POST   /                   -> create_challenge
/// GET    /skill/{skillId}    -> list_skill_challenges
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(challenges::create_challenge))
        .route("/skill/{skill_id}", get(challenges::list_skill_challenges))
}
