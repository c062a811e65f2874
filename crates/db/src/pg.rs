//! PostgreSQL-backed [`Store`].

use async_trait::async_trait;
use skillforge_core::practice::PracticeUpdate;
use skillforge_core::types::{RecordId, Timestamp};

use crate::models::challenge::{Challenge, NewChallenge};
use crate::models::skill::{NewSkill, Skill};
use crate::repositories::{ChallengeRepo, SkillRepo};
use crate::store::{ChallengeStore, SkillStore, Store, StoreError};
use crate::DbPool;

/// Store backed by the `skills` and `challenges` tables.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillStore for PgStore {
    async fn insert_skill(&self, skill: &NewSkill) -> Result<Skill, StoreError> {
        Ok(SkillRepo::create(&self.pool, skill).await?)
    }

    async fn find_skill(&self, skill_id: RecordId) -> Result<Option<Skill>, StoreError> {
        Ok(SkillRepo::find_by_id(&self.pool, skill_id).await?)
    }

    async fn list_skills_for_user(&self, user_id: &str) -> Result<Vec<Skill>, StoreError> {
        Ok(SkillRepo::list_by_user(&self.pool, user_id).await?)
    }

    async fn record_practice(
        &self,
        skill_id: RecordId,
        update: &PracticeUpdate,
        updated_at: Timestamp,
    ) -> Result<Option<Skill>, StoreError> {
        Ok(SkillRepo::update_practice(&self.pool, skill_id, update, updated_at).await?)
    }

    async fn delete_skill(&self, skill_id: RecordId) -> Result<bool, StoreError> {
        Ok(SkillRepo::delete(&self.pool, skill_id).await?)
    }
}

#[async_trait]
impl ChallengeStore for PgStore {
    async fn insert_challenge(&self, challenge: &NewChallenge) -> Result<Challenge, StoreError> {
        Ok(ChallengeRepo::create(&self.pool, challenge).await?)
    }

    async fn list_challenges_for_skill(
        &self,
        skill_id: RecordId,
    ) -> Result<Vec<Challenge>, StoreError> {
        Ok(ChallengeRepo::list_by_skill(&self.pool, skill_id).await?)
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
