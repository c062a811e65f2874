use std::sync::Arc;

use skillforge_ai::ContentService;
use skillforge_db::Store;
use skillforge_github::SkillScanner;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Skill and challenge records (Postgres or in-memory).
    pub store: Arc<dyn Store>,
    /// Challenge and quiz content with template fallback.
    pub content: Arc<ContentService>,
    /// GitHub skill scanner; `None` when sync is not configured.
    pub scanner: Option<Arc<dyn SkillScanner>>,
    pub config: Arc<ServerConfig>,
}
