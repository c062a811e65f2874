//! Deterministic content used when no provider is configured or it fails.

use async_trait::async_trait;

use crate::content::{ChallengeContent, ContentSource, QuizQuestion};
use crate::provider::GenerationError;
use crate::question_bank;

pub const DEFAULT_ESTIMATED_TIME: &str = "30 minutes";

pub const DEFAULT_REQUIREMENTS: [&str; 3] = [
    "Complete the challenge",
    "Test your solution",
    "Review and improve",
];

/// Longest description salvaged from a free-text reply, in characters.
pub const SALVAGED_DESCRIPTION_CHARS: usize = 200;

/// `Medium` above 70 proficiency, otherwise `Easy`.
pub fn difficulty_for(proficiency: f64) -> &'static str {
    if proficiency > 70.0 {
        "Medium"
    } else {
        "Easy"
    }
}

fn refresh_challenge(skill_name: &str, proficiency: f64, description: String) -> ChallengeContent {
    ChallengeContent {
        title: format!("{skill_name} Refresh Challenge"),
        description,
        requirements: DEFAULT_REQUIREMENTS.iter().map(|r| r.to_string()).collect(),
        estimated_time: DEFAULT_ESTIMATED_TIME.to_string(),
        difficulty: difficulty_for(proficiency).to_string(),
    }
}

/// Wrap a free-text provider reply in the refresh-challenge template.
pub fn challenge_from_text(skill_name: &str, proficiency: f64, text: &str) -> ChallengeContent {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return TemplateContent.template_challenge(skill_name, proficiency);
    }
    let description: String = trimmed.chars().take(SALVAGED_DESCRIPTION_CHARS).collect();
    refresh_challenge(skill_name, proficiency, description)
}

/// Template challenges plus the static question bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateContent;

impl TemplateContent {
    pub fn template_challenge(&self, skill_name: &str, proficiency: f64) -> ChallengeContent {
        let description = format!(
            "Build a small, self-contained exercise that uses {skill_name} end to end. \
             Pick a feature you have not touched recently and get it working without \
             looking up the basics."
        );
        refresh_challenge(skill_name, proficiency, description)
    }

    pub fn bank_quiz(&self, skill_name: &str, count: usize) -> Vec<QuizQuestion> {
        question_bank::questions_for(skill_name, count)
    }
}

#[async_trait]
impl ContentSource for TemplateContent {
    fn name(&self) -> &str {
        "template"
    }

    async fn challenge(
        &self,
        skill_name: &str,
        proficiency: f64,
    ) -> Result<ChallengeContent, GenerationError> {
        Ok(self.template_challenge(skill_name, proficiency))
    }

    async fn quiz(
        &self,
        skill_name: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        Ok(self.bank_quiz(skill_name, count))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::content::{ContentOrigin, ContentService};

    #[test]
    fn difficulty_threshold_is_exclusive() {
        assert_eq!(difficulty_for(70.0), "Easy");
        assert_eq!(difficulty_for(70.5), "Medium");
        assert_eq!(difficulty_for(0.0), "Easy");
    }

    #[test]
    fn salvaged_description_is_truncated_by_chars() {
        let text = "é".repeat(250);
        let challenge = challenge_from_text("Rust", 50.0, &text);
        assert_eq!(challenge.description.chars().count(), 200);
        assert_eq!(challenge.title, "Rust Refresh Challenge");
        assert_eq!(challenge.requirements, DEFAULT_REQUIREMENTS);
        assert_eq!(challenge.estimated_time, "30 minutes");
    }

    #[test]
    fn blank_reply_uses_template_description() {
        let challenge = challenge_from_text("Go", 90.0, "   ");
        assert!(challenge.description.contains("Go"));
        assert_eq!(challenge.difficulty, "Medium");
    }

    #[tokio::test]
    async fn template_source_can_be_primary() {
        let service = ContentService::with_primary(Arc::new(TemplateContent));
        assert_eq!(service.primary_name(), Some("template"));

        let quiz = service.quiz("Git", 2).await;
        assert_eq!(quiz.origin, ContentOrigin::Generated);
        assert_eq!(quiz.content.len(), 2);
    }
}
