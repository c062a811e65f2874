//! Skill entity model and DTOs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skillforge_core::category::SkillCategory;
use skillforge_core::decay::{self, RetentionInput, SkillHealth, DEFAULT_DECAY_RATE};
use skillforge_core::error::CoreError;
use skillforge_core::types::{RecordId, Timestamp, UserId};
use skillforge_core::validation::{validate_proficiency, validate_skill_name, validate_user_id};
use sqlx::FromRow;

/// Proficiency assigned when a create request omits it.
pub const DEFAULT_PROFICIENCY: f64 = 100.0;

/// Where a skill record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSource {
    Manual,
    Github,
}

impl SkillSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Github => "github",
        }
    }
}

impl fmt::Display for SkillSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(Self::Manual),
            "github" => Ok(Self::Github),
            other => Err(CoreError::Validation(format!("Unknown skill source '{other}'"))),
        }
    }
}

/// A tracked skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_id: RecordId,
    pub user_id: UserId,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: f64,
    pub last_practiced: Timestamp,
    pub decay_rate: f64,
    pub source: SkillSource,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Skill {
    /// The fields the decay engine reads.
    pub fn retention_input(&self) -> RetentionInput<'_> {
        RetentionInput {
            skill_id: self.skill_id,
            name: &self.name,
            proficiency: self.proficiency,
            decay_rate: self.decay_rate,
            last_practiced: self.last_practiced,
        }
    }

    pub fn health_at(&self, now: Timestamp) -> SkillHealth {
        decay::assess(self.retention_input(), now)
    }
}

/// A row from the `skills` table.
#[derive(Debug, FromRow)]
pub struct SkillRow {
    pub skill_id: RecordId,
    pub user_id: String,
    pub name: String,
    pub category: String,
    pub proficiency: f64,
    pub last_practiced: Timestamp,
    pub decay_rate: f64,
    pub source: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Self {
            skill_id: row.skill_id,
            user_id: row.user_id,
            name: row.name,
            category: SkillCategory::from_external(Some(&row.category)),
            proficiency: row.proficiency,
            last_practiced: row.last_practiced,
            decay_rate: row.decay_rate,
            source: row.source.parse().unwrap_or(SkillSource::Manual),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A validated skill ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewSkill {
    pub skill_id: RecordId,
    pub user_id: UserId,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: f64,
    pub last_practiced: Timestamp,
    pub decay_rate: f64,
    pub source: SkillSource,
    pub created_at: Timestamp,
}

impl NewSkill {
    /// Materialize the record a store persists for this insert.
    pub fn to_skill(&self) -> Skill {
        Skill {
            skill_id: self.skill_id,
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            category: self.category,
            proficiency: self.proficiency,
            last_practiced: self.last_practiced,
            decay_rate: self.decay_rate,
            source: self.source,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// DTO for creating a skill manually.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkill {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub proficiency: Option<f64>,
    pub last_practiced: Option<Timestamp>,
}

impl CreateSkill {
    /// Validate the request and fill in defaults.
    ///
    /// `default_user_id` is used when the request omits `userId`; without
    /// one, a missing `userId` is rejected.
    pub fn into_new_skill(
        self,
        default_user_id: Option<&str>,
        now: Timestamp,
    ) -> Result<NewSkill, CoreError> {
        let user_id = self
            .user_id
            .as_deref()
            .or(default_user_id)
            .ok_or_else(|| CoreError::Validation("userId is required".to_string()))?;
        let user_id = validate_user_id(user_id)?;

        let name = validate_skill_name(self.name.as_deref().unwrap_or_default())?;

        let category = match self.category.as_deref() {
            Some(raw) => raw.parse()?,
            None => SkillCategory::Other,
        };

        let proficiency = self.proficiency.unwrap_or(DEFAULT_PROFICIENCY);
        validate_proficiency(proficiency)?;

        Ok(NewSkill {
            skill_id: RecordId::new_v4(),
            user_id,
            name,
            category,
            proficiency,
            last_practiced: self.last_practiced.unwrap_or(now),
            decay_rate: DEFAULT_DECAY_RATE,
            source: SkillSource::Manual,
            created_at: now,
        })
    }
}

/// DTO for `PUT /skills/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkill {
    pub proficiency: f64,
    pub last_practiced: Option<Timestamp>,
}

/// DTO for `POST /skills/{id}/practice`. An empty body is allowed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkPracticed {
    pub proficiency: Option<f64>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 10, 17, 8, 30, 0).unwrap()
    }

    fn request() -> CreateSkill {
        CreateSkill {
            user_id: Some("mrinali".into()),
            name: Some("React".into()),
            category: Some("Frontend".into()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_are_applied_on_create() {
        let skill = request().into_new_skill(None, now()).unwrap();
        assert_eq!(skill.proficiency, DEFAULT_PROFICIENCY);
        assert_eq!(skill.decay_rate, DEFAULT_DECAY_RATE);
        assert_eq!(skill.last_practiced, now());
        assert_eq!(skill.source, SkillSource::Manual);
        assert_eq!(skill.category, SkillCategory::Frontend);
    }

    #[test]
    fn zero_proficiency_is_kept() {
        let skill = CreateSkill {
            proficiency: Some(0.0),
            ..request()
        }
        .into_new_skill(None, now())
        .unwrap();
        assert_eq!(skill.proficiency, 0.0);
    }

    #[test]
    fn missing_user_id_uses_configured_default() {
        let req = CreateSkill {
            user_id: None,
            ..request()
        };
        assert_matches!(req.into_new_skill(None, now()), Err(CoreError::Validation(_)));

        let req = CreateSkill {
            user_id: None,
            ..request()
        };
        assert_eq!(req.into_new_skill(Some("demo"), now()).unwrap().user_id, "demo");
    }

    #[test]
    fn missing_name_is_rejected() {
        let req = CreateSkill {
            name: None,
            ..request()
        };
        assert_matches!(req.into_new_skill(None, now()), Err(CoreError::Validation(_)));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let req = CreateSkill {
            category: Some("Knitting".into()),
            ..request()
        };
        assert_matches!(req.into_new_skill(None, now()), Err(CoreError::Validation(_)));
    }

    #[test]
    fn proficiency_above_ceiling_is_rejected() {
        let req = CreateSkill {
            proficiency: Some(140.0),
            ..request()
        };
        assert_matches!(req.into_new_skill(None, now()), Err(CoreError::Validation(_)));
    }

    #[test]
    fn unknown_stored_source_reads_as_manual() {
        let row = SkillRow {
            skill_id: RecordId::new_v4(),
            user_id: "u".into(),
            name: "Go".into(),
            category: "Backend".into(),
            proficiency: 50.0,
            last_practiced: now(),
            decay_rate: DEFAULT_DECAY_RATE,
            source: "csv".into(),
            created_at: now(),
            updated_at: now(),
        };
        let skill = Skill::from(row);
        assert_eq!(skill.source, SkillSource::Manual);
        assert_eq!(skill.category, SkillCategory::Backend);
    }
}
