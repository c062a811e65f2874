//! Repository for the `skills` table.

use sqlx::PgPool;
use skillforge_core::practice::PracticeUpdate;
use skillforge_core::types::{RecordId, Timestamp};

use crate::models::skill::{NewSkill, Skill, SkillRow};

/// Column list for `skills` queries.
const COLUMNS: &str = "\
    skill_id, user_id, name, category, proficiency, last_practiced, \
    decay_rate, source, created_at, updated_at";

/// Provides CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the full row.
    pub async fn create(pool: &PgPool, input: &NewSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills \
                (skill_id, user_id, name, category, proficiency, last_practiced, \
                 decay_rate, source, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillRow>(&query)
            .bind(input.skill_id)
            .bind(&input.user_id)
            .bind(&input.name)
            .bind(input.category.label())
            .bind(input.proficiency)
            .bind(input.last_practiced)
            .bind(input.decay_rate)
            .bind(input.source.as_str())
            .bind(input.created_at)
            .fetch_one(pool)
            .await
            .map(Skill::from)
    }

    /// Find a skill by ID.
    pub async fn find_by_id(pool: &PgPool, id: RecordId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE skill_id = $1");
        let row = sqlx::query_as::<_, SkillRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Skill::from))
    }

    /// List a user's skills, oldest first.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills WHERE user_id = $1 \
             ORDER BY created_at ASC, skill_id ASC"
        );
        let rows = sqlx::query_as::<_, SkillRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Skill::from).collect())
    }

    /// Overwrite proficiency and last-practiced time. Returns the updated row
    /// if found.
    pub async fn update_practice(
        pool: &PgPool,
        id: RecordId,
        update: &PracticeUpdate,
        updated_at: Timestamp,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills \
             SET proficiency = $1, last_practiced = $2, updated_at = $3 \
             WHERE skill_id = $4 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SkillRow>(&query)
            .bind(update.proficiency)
            .bind(update.last_practiced)
            .bind(updated_at)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Skill::from))
    }

    /// Delete a skill. Challenges go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE skill_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
