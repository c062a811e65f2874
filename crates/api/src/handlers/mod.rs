//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! go through the [`skillforge_db::Store`] capability and the content service
//! held in [`crate::state::AppState`] and map errors via
//! [`crate::error::AppError`].

pub mod categories;
pub mod challenges;
pub mod integrations;
pub mod quiz;
pub mod skills;
