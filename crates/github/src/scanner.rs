use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Scanner returned error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Invalid scanner response: {0}")]
    InvalidResponse(String),

    /// The scanner ran and reported failure (bad username, rate limit, ...).
    #[error("Scan rejected: {0}")]
    Rejected(String),
}

/// One skill the scanner believes the user has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedSkill {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Numbers or numeric strings; null and anything else read as 0.
    #[serde(default, deserialize_with = "lenient_proficiency")]
    pub proficiency: f64,
    /// Unparseable timestamps are dropped rather than failing the scan.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_practiced: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    #[serde(default)]
    pub skills: Vec<DetectedSkill>,
    /// Passed through to the client untouched.
    #[serde(default)]
    pub repositories: serde_json::Value,
    #[serde(default)]
    pub language_stats: serde_json::Value,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}

fn lenient_proficiency<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|p| p.is_finite()).unwrap_or(0.0))
}

/// Detects skills from a GitHub account.
#[async_trait]
pub trait SkillScanner: Send + Sync {
    async fn scan(&self, username: &str, token: Option<&str>) -> Result<ScanReport, ScanError>;
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn detected_skill_parses_iso_timestamp() {
        let skill: DetectedSkill = serde_json::from_value(serde_json::json!({
            "name": "Rust",
            "category": "Programming Language",
            "proficiency": 64,
            "lastPracticed": "2025-10-01T12:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(skill.proficiency, 64.0);
        assert_eq!(
            skill.last_practiced,
            Some(Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn bad_timestamp_and_missing_fields_are_tolerated() {
        let skill: DetectedSkill = serde_json::from_value(serde_json::json!({
            "name": "Go",
            "lastPracticed": "last tuesday"
        }))
        .unwrap();
        assert_eq!(skill.category, None);
        assert_eq!(skill.proficiency, 0.0);
        assert_eq!(skill.last_practiced, None);
    }

    #[test]
    fn proficiency_accepts_numeric_strings_and_zeroes_junk() {
        let report: ScanReport = serde_json::from_value(serde_json::json!({
            "skills": [
                {"name": "Rust", "proficiency": 82},
                {"name": "Go", "proficiency": null},
                {"name": "Python", "proficiency": " 70 "},
                {"name": "Java", "proficiency": "expert"},
                {"name": "C", "proficiency": [1, 2]}
            ]
        }))
        .unwrap();

        let levels: Vec<_> = report
            .skills
            .iter()
            .map(|s| (s.name.as_str(), s.proficiency))
            .collect();
        assert_eq!(
            levels,
            vec![
                ("Rust", 82.0),
                ("Go", 0.0),
                ("Python", 70.0),
                ("Java", 0.0),
                ("C", 0.0),
            ]
        );
    }

    #[test]
    fn report_defaults_passthrough_fields() {
        let report: ScanReport = serde_json::from_value(serde_json::json!({
            "skills": []
        }))
        .unwrap();
        assert!(report.skills.is_empty());
        assert!(report.repositories.is_null());
    }
}
