//! Size and shape checks on user-supplied text.

use serde::{Deserialize, Serialize};

use crate::IntakeError;

/// Ceilings for user-supplied inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntakeLimits {
    /// Maximum job-description length in characters.
    #[serde(default = "IntakeLimits::default_max_job_description_len")]
    pub max_job_description_len: usize,
    /// Maximum profile/resume size in bytes.
    #[serde(default = "IntakeLimits::default_max_profile_bytes")]
    pub max_profile_bytes: usize,
}

impl IntakeLimits {
    const fn default_max_job_description_len() -> usize {
        50_000
    }

    const fn default_max_profile_bytes() -> usize {
        5 * 1024 * 1024
    }
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            max_job_description_len: Self::default_max_job_description_len(),
            max_profile_bytes: Self::default_max_profile_bytes(),
        }
    }
}

/// Reject empty or oversized job descriptions.
pub fn validate_job_description(text: &str, limits: &IntakeLimits) -> Result<(), IntakeError> {
    if text.trim().is_empty() {
        return Err(IntakeError::Validation(
            "Job description is empty".to_string(),
        ));
    }
    let len = text.chars().count();
    if len > limits.max_job_description_len {
        return Err(IntakeError::Validation(format!(
            "Job description exceeds {} characters (got {len})",
            limits.max_job_description_len
        )));
    }
    Ok(())
}

/// Reject oversized profile text. An empty profile is allowed; the original
/// treats candidate notes as optional.
pub fn validate_profile(text: &str, limits: &IntakeLimits) -> Result<(), IntakeError> {
    if text.len() > limits.max_profile_bytes {
        return Err(IntakeError::Validation(format!(
            "Profile exceeds {} MB limit",
            limits.max_profile_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}
