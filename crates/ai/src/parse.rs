//! Defensive parsing of provider replies.
//!
//! Replies are free text. We strip markdown fences, cut out the outermost
//! JSON value, and validate field by field rather than trusting the shape.

use serde::Deserialize;

use crate::content::{ChallengeContent, QuizQuestion};
use crate::provider::GenerationError;
use crate::templates::{difficulty_for, DEFAULT_ESTIMATED_TIME, DEFAULT_REQUIREMENTS};

/// Remove a surrounding ```` ``` ```` / ```` ```json ```` fence if present.
pub fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the end of the opening line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };
    body.trim_end().trim_end_matches("```").trim()
}

/// Slice from the first `open` to the last `close`, inclusive.
fn outermost(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

fn invalid(msg: impl Into<String>) -> GenerationError {
    GenerationError::InvalidResponse(msg.into())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Canonical difficulty label, if `raw` names one.
pub fn normalize_difficulty(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "easy" => Some("Easy"),
        "medium" => Some("Medium"),
        "hard" => Some("Hard"),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChallenge {
    title: Option<String>,
    description: Option<String>,
    #[serde(default)]
    requirements: Vec<serde_json::Value>,
    estimated_time: Option<String>,
    difficulty: Option<String>,
}

/// Parse a challenge reply. Title and description are required; the rest
/// fall back to template defaults (difficulty from `proficiency`).
pub fn parse_challenge(text: &str, proficiency: f64) -> Result<ChallengeContent, GenerationError> {
    let body = strip_fences(text);
    let json = outermost(body, '{', '}').ok_or_else(|| invalid("no JSON object in reply"))?;
    let raw: RawChallenge =
        serde_json::from_str(json).map_err(|e| invalid(format!("challenge JSON: {e}")))?;

    let title = non_blank(raw.title).ok_or_else(|| invalid("challenge has no title"))?;
    let description =
        non_blank(raw.description).ok_or_else(|| invalid("challenge has no description"))?;

    let mut requirements: Vec<String> = raw
        .requirements
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => non_blank(Some(s)),
            _ => None,
        })
        .collect();
    if requirements.is_empty() {
        requirements = DEFAULT_REQUIREMENTS.iter().map(|r| r.to_string()).collect();
    }

    let difficulty = raw
        .difficulty
        .as_deref()
        .and_then(normalize_difficulty)
        .unwrap_or_else(|| difficulty_for(proficiency));

    Ok(ChallengeContent {
        title,
        description,
        requirements,
        estimated_time: non_blank(raw.estimated_time)
            .unwrap_or_else(|| DEFAULT_ESTIMATED_TIME.to_string()),
        difficulty: difficulty.to_string(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    question: Option<String>,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: Option<i64>,
    explanation: Option<String>,
    code: Option<String>,
}

impl RawQuestion {
    fn validate(self) -> Option<QuizQuestion> {
        let question = non_blank(self.question)?;
        if self.options.len() < 2 {
            return None;
        }
        let correct_answer = usize::try_from(self.correct_answer?).ok()?;
        if correct_answer >= self.options.len() {
            return None;
        }
        Some(QuizQuestion {
            question,
            options: self.options,
            correct_answer,
            explanation: non_blank(self.explanation).unwrap_or_default(),
            code: non_blank(self.code),
        })
    }
}

/// Parse a quiz reply, keeping at most `count` valid questions. Malformed
/// entries are skipped; a reply with none left is an error.
pub fn parse_quiz(text: &str, count: usize) -> Result<Vec<QuizQuestion>, GenerationError> {
    let body = strip_fences(text);
    let json = outermost(body, '[', ']').ok_or_else(|| invalid("no JSON array in reply"))?;
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| invalid(format!("quiz JSON: {e}")))?;

    let questions: Vec<QuizQuestion> = raw
        .into_iter()
        .filter_map(|v| serde_json::from_value::<RawQuestion>(v).ok())
        .filter_map(RawQuestion::validate)
        .take(count)
        .collect();

    if questions.is_empty() {
        return Err(invalid("quiz reply had no usable questions"));
    }
    Ok(questions)
}
