//! Practice content and the try/fallback policy around it.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::parse::{parse_challenge, parse_quiz};
use crate::prompts::{challenge_prompt, quiz_prompt, CHALLENGE_MAX_TOKENS, QUIZ_MAX_TOKENS};
use crate::provider::{GenerationError, GenerationRequest, TextGenerator};
use crate::templates::{challenge_from_text, TemplateContent};

/// Questions per quiz when the caller does not ask for a number.
pub const DEFAULT_QUIZ_QUESTIONS: usize = 5;

/// Upper bound on questions per quiz.
pub const MAX_QUIZ_QUESTIONS: usize = 20;

/// Challenge body as produced by a content source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeContent {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub estimated_time: String,
    pub difficulty: String,
}

/// A multiple-choice question. `correct_answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Where a piece of content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    Generated,
    Template,
}

impl ContentOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentOrigin::Generated => "generated",
            ContentOrigin::Template => "template",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub content: T,
    pub origin: ContentOrigin,
}

/// Anything that can produce challenges and quizzes.
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn name(&self) -> &str;

    async fn challenge(
        &self,
        skill_name: &str,
        proficiency: f64,
    ) -> Result<ChallengeContent, GenerationError>;

    async fn quiz(
        &self,
        skill_name: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, GenerationError>;
}

/// Clamp a requested question count into `[1, MAX_QUIZ_QUESTIONS]`.
pub fn clamp_question_count(requested: Option<i64>) -> usize {
    match requested {
        None => DEFAULT_QUIZ_QUESTIONS,
        Some(n) => n.clamp(1, MAX_QUIZ_QUESTIONS as i64) as usize,
    }
}

// ---------------------------------------------------------------------------
// Generated content
// ---------------------------------------------------------------------------

/// Prompt -> [`TextGenerator`] -> defensive parse.
pub struct GeneratedContent {
    generator: Arc<dyn TextGenerator>,
}

impl GeneratedContent {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl ContentSource for GeneratedContent {
    fn name(&self) -> &str {
        self.generator.id()
    }

    async fn challenge(
        &self,
        skill_name: &str,
        proficiency: f64,
    ) -> Result<ChallengeContent, GenerationError> {
        let request = GenerationRequest::new(challenge_prompt(skill_name, proficiency))
            .with_max_tokens(CHALLENGE_MAX_TOKENS);
        let text = self.generator.generate(request).await?;

        match parse_challenge(&text, proficiency) {
            Ok(challenge) => Ok(challenge),
            Err(e) => {
                // The provider answered in prose; keep its words.
                tracing::debug!(error = %e, skill = %skill_name, "Challenge reply was not JSON");
                Ok(challenge_from_text(skill_name, proficiency, &text))
            }
        }
    }

    async fn quiz(
        &self,
        skill_name: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        let request =
            GenerationRequest::new(quiz_prompt(skill_name, count)).with_max_tokens(QUIZ_MAX_TOKENS);
        let text = self.generator.generate(request).await?;
        parse_quiz(&text, count)
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Tries the primary source when one is configured and substitutes template
/// content on any failure. Never returns an error.
pub struct ContentService {
    primary: Option<Arc<dyn ContentSource>>,
    fallback: TemplateContent,
}

impl ContentService {
    /// Template content only.
    pub fn templated() -> Self {
        Self {
            primary: None,
            fallback: TemplateContent,
        }
    }

    pub fn with_primary(primary: Arc<dyn ContentSource>) -> Self {
        Self {
            primary: Some(primary),
            fallback: TemplateContent,
        }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_primary(Arc::new(GeneratedContent::new(generator)))
    }

    pub fn primary_name(&self) -> Option<&str> {
        self.primary.as_deref().map(|p| p.name())
    }

    pub async fn challenge(&self, skill_name: &str, proficiency: f64) -> Sourced<ChallengeContent> {
        if let Some(primary) = &self.primary {
            match primary.challenge(skill_name, proficiency).await {
                Ok(content) => {
                    return Sourced {
                        content,
                        origin: ContentOrigin::Generated,
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        source = %primary.name(),
                        skill = %skill_name,
                        "Challenge generation failed, using template"
                    );
                }
            }
        }

        Sourced {
            content: self.fallback.template_challenge(skill_name, proficiency),
            origin: ContentOrigin::Template,
        }
    }

    pub async fn quiz(&self, skill_name: &str, count: usize) -> Sourced<Vec<QuizQuestion>> {
        if let Some(primary) = &self.primary {
            match primary.quiz(skill_name, count).await {
                Ok(content) => {
                    return Sourced {
                        content,
                        origin: ContentOrigin::Generated,
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        source = %primary.name(),
                        skill = %skill_name,
                        "Quiz generation failed, using question bank"
                    );
                }
            }
        }

        Sourced {
            content: self.fallback.bank_quiz(skill_name, count),
            origin: ContentOrigin::Template,
        }
    }
}
