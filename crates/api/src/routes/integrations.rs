use axum::routing::post;
use axum::Router;

use crate::handlers::integrations;
use crate::state::AppState;

/// Mounted at `/integrations`.
///
/// ```text
/// POST   /github             -> sync_github
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/github", post(integrations::sync_github))
}
