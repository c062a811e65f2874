//! Challenge entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillforge_core::types::{RecordId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A generated practice challenge for a skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub challenge_id: RecordId,
    pub skill_id: RecordId,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub estimated_time: String,
    pub difficulty: String,
    pub completed: bool,
    pub created_at: Timestamp,
}

/// A row from the `challenges` table.
#[derive(Debug, FromRow)]
pub struct ChallengeRow {
    pub challenge_id: RecordId,
    pub skill_id: RecordId,
    pub title: String,
    pub description: String,
    pub requirements: Json<Vec<String>>,
    pub estimated_time: String,
    pub difficulty: String,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl From<ChallengeRow> for Challenge {
    fn from(row: ChallengeRow) -> Self {
        Self {
            challenge_id: row.challenge_id,
            skill_id: row.skill_id,
            title: row.title,
            description: row.description,
            requirements: row.requirements.0,
            estimated_time: row.estimated_time,
            difficulty: row.difficulty,
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}

/// A challenge ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewChallenge {
    pub challenge_id: RecordId,
    pub skill_id: RecordId,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub estimated_time: String,
    pub difficulty: String,
    pub created_at: Timestamp,
}

impl NewChallenge {
    pub fn to_challenge(&self) -> Challenge {
        Challenge {
            challenge_id: self.challenge_id,
            skill_id: self.skill_id,
            title: self.title.clone(),
            description: self.description.clone(),
            requirements: self.requirements.clone(),
            estimated_time: self.estimated_time.clone(),
            difficulty: self.difficulty.clone(),
            completed: false,
            created_at: self.created_at,
        }
    }
}

/// DTO for `POST /challenges`.
///
/// `skillName` and `proficiency` override the stored skill's values in the
/// generation prompt when present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChallenge {
    pub skill_id: RecordId,
    pub skill_name: Option<String>,
    pub proficiency: Option<f64>,
}
