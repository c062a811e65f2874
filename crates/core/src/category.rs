//! Skill categories and their display metadata.
//!
//! Categories drive grouping and colouring only. They are validated on
//! manual input so the icon/colour tables can never be indexed with an
//! unknown key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    #[serde(rename = "Frontend Framework")]
    FrontendFramework,
    Backend,
    DevOps,
    Mobile,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Programming Language")]
    ProgrammingLanguage,
    Database,
    Other,
}

/// Every category, in display order.
pub const ALL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory::Frontend,
    SkillCategory::FrontendFramework,
    SkillCategory::Backend,
    SkillCategory::DevOps,
    SkillCategory::Mobile,
    SkillCategory::DataScience,
    SkillCategory::ProgrammingLanguage,
    SkillCategory::Database,
    SkillCategory::Other,
];

impl SkillCategory {
    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::FrontendFramework => "Frontend Framework",
            Self::Backend => "Backend",
            Self::DevOps => "DevOps",
            Self::Mobile => "Mobile",
            Self::DataScience => "Data Science",
            Self::ProgrammingLanguage => "Programming Language",
            Self::Database => "Database",
            Self::Other => "Other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Frontend | Self::FrontendFramework => "⚛️",
            Self::Backend => "🔧",
            Self::DevOps => "🐳",
            Self::Mobile => "📱",
            Self::DataScience => "📊",
            Self::ProgrammingLanguage => "💻",
            Self::Database => "🗄️",
            Self::Other => "📚",
        }
    }

    /// Hex colour used for category badges.
    pub fn color(self) -> &'static str {
        match self {
            Self::Frontend | Self::FrontendFramework => "#3b82f6",
            Self::Backend => "#10b981",
            Self::DevOps => "#f59e0b",
            Self::Mobile => "#ec4899",
            Self::DataScience => "#8b5cf6",
            Self::ProgrammingLanguage => "#06b6d4",
            Self::Database => "#ef4444",
            Self::Other => "#6b7280",
        }
    }

    /// Parse a category reported by an external source, falling back to
    /// [`SkillCategory::Other`] for anything unrecognised.
    pub fn from_external(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or(Self::Other)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillCategory {
    type Err = CoreError;

    /// Case-insensitive match on the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let labels: Vec<_> = ALL_CATEGORIES.iter().map(|c| c.label()).collect();
                CoreError::Validation(format!(
                    "Invalid category '{s}'. Must be one of: {}",
                    labels.join(", ")
                ))
            })
    }
}

/// Category with its display metadata, for the categories endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub fn catalog() -> Vec<CategoryInfo> {
    ALL_CATEGORIES
        .iter()
        .map(|c| CategoryInfo {
            name: c.label(),
            icon: c.icon(),
            color: c.color(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for c in ALL_CATEGORIES {
            assert_eq!(c.label().parse::<SkillCategory>().unwrap(), *c);
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(
            " data science ".parse::<SkillCategory>().unwrap(),
            SkillCategory::DataScience
        );
        assert_eq!("devops".parse::<SkillCategory>().unwrap(), SkillCategory::DevOps);
    }

    #[test]
    fn unknown_category_is_a_validation_error() {
        let err = "Cooking".parse::<SkillCategory>().unwrap_err();
        assert!(err.to_string().contains("Invalid category"));
    }

    #[test]
    fn external_categories_fall_back_to_other() {
        assert_eq!(SkillCategory::from_external(Some("Quantum")), SkillCategory::Other);
        assert_eq!(SkillCategory::from_external(None), SkillCategory::Other);
        assert_eq!(
            SkillCategory::from_external(Some("Backend")),
            SkillCategory::Backend
        );
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&SkillCategory::ProgrammingLanguage).unwrap();
        assert_eq!(json, "\"Programming Language\"");
        let parsed: SkillCategory = serde_json::from_str("\"Data Science\"").unwrap();
        assert_eq!(parsed, SkillCategory::DataScience);
    }

    #[test]
    fn catalog_lists_every_category() {
        assert_eq!(catalog().len(), ALL_CATEGORIES.len());
    }
}
