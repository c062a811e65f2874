//! Input validation for skill records.

use crate::error::CoreError;
use crate::practice::MAX_PROFICIENCY;

/// Maximum length for a skill name (characters).
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for a user id (characters).
pub const MAX_USER_ID_LENGTH: usize = 128;

/// Proficiency must be a finite number in `[0, 100]`.
pub fn validate_proficiency(proficiency: f64) -> Result<(), CoreError> {
    if !proficiency.is_finite() || !(0.0..=MAX_PROFICIENCY).contains(&proficiency) {
        return Err(CoreError::Validation(format!(
            "Proficiency must be between 0 and {MAX_PROFICIENCY} (got {proficiency})"
        )));
    }
    Ok(())
}

/// Validate and normalize a skill name. Returns the trimmed name.
pub fn validate_skill_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Skill name is required".to_string()));
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Skill name exceeds maximum length of {MAX_NAME_LENGTH} characters (got {len})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate and normalize a user id. Returns the trimmed id.
pub fn validate_user_id(user_id: &str) -> Result<String, CoreError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("userId is required".to_string()));
    }
    if trimmed.chars().count() > MAX_USER_ID_LENGTH {
        return Err(CoreError::Validation(format!(
            "userId exceeds maximum length of {MAX_USER_ID_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}
