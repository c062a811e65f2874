//! In-process [`Store`] used when no database is configured, and by tests.
//!
//! Records live in insertion-ordered vectors behind a single async lock.
//! Nothing survives a restart.

use async_trait::async_trait;
use skillforge_core::practice::PracticeUpdate;
use skillforge_core::types::{RecordId, Timestamp};
use tokio::sync::RwLock;

use crate::models::challenge::{Challenge, NewChallenge};
use crate::models::skill::{NewSkill, Skill};
use crate::store::{ChallengeStore, SkillStore, Store, StoreError};

#[derive(Default)]
struct Tables {
    skills: Vec<Skill>,
    challenges: Vec<Challenge>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SkillStore for MemoryStore {
    async fn insert_skill(&self, skill: &NewSkill) -> Result<Skill, StoreError> {
        let record = skill.to_skill();
        let mut tables = self.tables.write().await;
        // Primary key semantics: insert-or-replace.
        tables.skills.retain(|s| s.skill_id != record.skill_id);
        tables.skills.push(record.clone());
        Ok(record)
    }

    async fn find_skill(&self, skill_id: RecordId) -> Result<Option<Skill>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.skills.iter().find(|s| s.skill_id == skill_id).cloned())
    }

    async fn list_skills_for_user(&self, user_id: &str) -> Result<Vec<Skill>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .skills
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn record_practice(
        &self,
        skill_id: RecordId,
        update: &PracticeUpdate,
        updated_at: Timestamp,
    ) -> Result<Option<Skill>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(skill) = tables.skills.iter_mut().find(|s| s.skill_id == skill_id) else {
            return Ok(None);
        };
        skill.proficiency = update.proficiency;
        skill.last_practiced = update.last_practiced;
        skill.updated_at = updated_at;
        Ok(Some(skill.clone()))
    }

    async fn delete_skill(&self, skill_id: RecordId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.skills.len();
        tables.skills.retain(|s| s.skill_id != skill_id);
        let removed = tables.skills.len() != before;
        if removed {
            tables.challenges.retain(|c| c.skill_id != skill_id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl ChallengeStore for MemoryStore {
    async fn insert_challenge(&self, challenge: &NewChallenge) -> Result<Challenge, StoreError> {
        let record = challenge.to_challenge();
        self.tables.write().await.challenges.push(record.clone());
        Ok(record)
    }

    async fn list_challenges_for_skill(
        &self,
        skill_id: RecordId,
    ) -> Result<Vec<Challenge>, StoreError> {
        let tables = self.tables.read().await;
        // Reverse insertion order: newest first.
        Ok(tables
            .challenges
            .iter()
            .rev()
            .filter(|c| c.skill_id == skill_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use skillforge_core::category::SkillCategory;
    use skillforge_core::decay::DEFAULT_DECAY_RATE;

    use super::*;
    use crate::models::skill::SkillSource;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 10, 17, 10, 0, 0).unwrap()
    }

    fn new_skill(user_id: &str, name: &str) -> NewSkill {
        NewSkill {
            skill_id: RecordId::new_v4(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            category: SkillCategory::Backend,
            proficiency: 80.0,
            last_practiced: now(),
            decay_rate: DEFAULT_DECAY_RATE,
            source: SkillSource::Manual,
            created_at: now(),
        }
    }

    fn new_challenge(skill_id: RecordId, title: &str) -> NewChallenge {
        NewChallenge {
            challenge_id: RecordId::new_v4(),
            skill_id,
            title: title.to_string(),
            description: "Build something".to_string(),
            requirements: vec!["Write tests".to_string()],
            estimated_time: "30 minutes".to_string(),
            difficulty: "Easy".to_string(),
            created_at: now(),
        }
    }

    #[tokio::test]
    async fn insert_then_find() {
        let store = MemoryStore::new();
        let created = store.insert_skill(&new_skill("u1", "Rust")).await.unwrap();
        let found = store.find_skill(created.skill_id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn list_is_scoped_to_user_in_insertion_order() {
        let store = MemoryStore::new();
        store.insert_skill(&new_skill("u1", "Rust")).await.unwrap();
        store.insert_skill(&new_skill("u2", "Go")).await.unwrap();
        store.insert_skill(&new_skill("u1", "SQL")).await.unwrap();

        let names: Vec<_> = store
            .list_skills_for_user("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Rust", "SQL"]);
    }

    #[tokio::test]
    async fn record_practice_overwrites_fields() {
        let store = MemoryStore::new();
        let skill = store.insert_skill(&new_skill("u1", "Rust")).await.unwrap();
        let later = now() + Duration::days(3);
        let update = PracticeUpdate {
            proficiency: 92.0,
            last_practiced: later,
        };

        let updated = store
            .record_practice(skill.skill_id, &update, later)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.proficiency, 92.0);
        assert_eq!(updated.last_practiced, later);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.created_at, skill.created_at);
    }

    #[tokio::test]
    async fn record_practice_on_missing_skill_is_none() {
        let store = MemoryStore::new();
        let update = PracticeUpdate {
            proficiency: 10.0,
            last_practiced: now(),
        };
        let result = store
            .record_practice(RecordId::new_v4(), &update, now())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_removes_skill_and_its_challenges() {
        let store = MemoryStore::new();
        let skill = store.insert_skill(&new_skill("u1", "Rust")).await.unwrap();
        store
            .insert_challenge(&new_challenge(skill.skill_id, "Ownership kata"))
            .await
            .unwrap();

        assert!(store.delete_skill(skill.skill_id).await.unwrap());
        assert!(store.find_skill(skill.skill_id).await.unwrap().is_none());
        assert!(store
            .list_challenges_for_skill(skill.skill_id)
            .await
            .unwrap()
            .is_empty());
        assert!(!store.delete_skill(skill.skill_id).await.unwrap());
    }

    #[tokio::test]
    async fn challenges_list_newest_first() {
        let store = MemoryStore::new();
        let skill_id = RecordId::new_v4();
        store.insert_challenge(&new_challenge(skill_id, "first")).await.unwrap();
        store.insert_challenge(&new_challenge(skill_id, "second")).await.unwrap();
        store
            .insert_challenge(&new_challenge(RecordId::new_v4(), "other"))
            .await
            .unwrap();

        let titles: Vec<_> = store
            .list_challenges_for_skill(skill_id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
    }
}
