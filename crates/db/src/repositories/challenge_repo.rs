//! Repository for the `challenges` table.

use sqlx::types::Json;
use sqlx::PgPool;
use skillforge_core::types::RecordId;

use crate::models::challenge::{Challenge, ChallengeRow, NewChallenge};

/// Column list for `challenges` queries.
const COLUMNS: &str = "\
    challenge_id, skill_id, title, description, requirements, \
    estimated_time, difficulty, completed, created_at";

pub struct ChallengeRepo;

impl ChallengeRepo {
    pub async fn create(pool: &PgPool, input: &NewChallenge) -> Result<Challenge, sqlx::Error> {
        let query = format!(
            "INSERT INTO challenges \
                (challenge_id, skill_id, title, description, requirements, \
                 estimated_time, difficulty, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChallengeRow>(&query)
            .bind(input.challenge_id)
            .bind(input.skill_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(Json(&input.requirements))
            .bind(&input.estimated_time)
            .bind(&input.difficulty)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
            .map(Challenge::from)
    }

    /// List challenges for a skill, newest first.
    pub async fn list_by_skill(
        pool: &PgPool,
        skill_id: RecordId,
    ) -> Result<Vec<Challenge>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM challenges WHERE skill_id = $1 \
             ORDER BY created_at DESC"
        );
        let rows = sqlx::query_as::<_, ChallengeRow>(&query)
            .bind(skill_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Challenge::from).collect())
    }
}
