//! Practice content for SkillForge: generated challenges and quizzes.
//!
//! Generation goes through the [`provider::TextGenerator`] capability. Every
//! call site reaches it via [`content::ContentService`], which falls back to
//! the deterministic [`templates::TemplateContent`] whenever the provider is
//! missing, fails, or returns something unusable.

pub mod anthropic;
pub mod content;
pub mod mock;
pub mod parse;
pub mod prompts;
pub mod provider;
pub mod question_bank;
pub mod templates;

pub use content::{ContentOrigin, ContentService, ContentSource, GeneratedContent, Sourced};
pub use provider::{GenerationError, GenerationRequest, TextGenerator};
