//! Store capabilities consumed by the API layer.
//!
//! The contract is a plain key-value record store: point lookup by primary
//! key, listing by a secondary key, insert, unconditional overwrite, delete.
//! There are no transactions or version checks, so concurrent practice
//! updates to the same skill are last-writer-wins.

use async_trait::async_trait;
use skillforge_core::practice::PracticeUpdate;
use skillforge_core::types::{RecordId, Timestamp};

use crate::models::challenge::{Challenge, NewChallenge};
use crate::models::skill::{NewSkill, Skill};

/// Errors from a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected or failed the operation.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait SkillStore: Send + Sync {
    async fn insert_skill(&self, skill: &NewSkill) -> Result<Skill, StoreError>;

    async fn find_skill(&self, skill_id: RecordId) -> Result<Option<Skill>, StoreError>;

    /// All skills owned by `user_id`, oldest first.
    async fn list_skills_for_user(&self, user_id: &str) -> Result<Vec<Skill>, StoreError>;

    /// Overwrite proficiency and last-practiced time. `None` if the skill
    /// does not exist.
    async fn record_practice(
        &self,
        skill_id: RecordId,
        update: &PracticeUpdate,
        updated_at: Timestamp,
    ) -> Result<Option<Skill>, StoreError>;

    /// Delete a skill and its challenges. Returns whether a row was removed.
    async fn delete_skill(&self, skill_id: RecordId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait ChallengeStore: Send + Sync {
    async fn insert_challenge(&self, challenge: &NewChallenge) -> Result<Challenge, StoreError>;

    /// Challenges for a skill, newest first.
    async fn list_challenges_for_skill(
        &self,
        skill_id: RecordId,
    ) -> Result<Vec<Challenge>, StoreError>;
}

/// The full record store used by request handlers.
#[async_trait]
pub trait Store: SkillStore + ChallengeStore {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
