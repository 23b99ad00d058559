use thiserror::Error;

use super::activity::Activity;

/// Reasons a draft activity cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("activity name cannot be empty")]
    EmptyName,
    #[error("calories must be greater than zero")]
    NonPositiveCalories,
}

/// Validates a draft: the trimmed name must be non-empty and calories positive.
///
/// The name is checked first.
pub fn validate_activity(activity: &Activity) -> Result<(), ValidationError> {
    validation_errors(activity)
        .into_iter()
        .next()
        .map_or(Ok(()), Err)
}

/// Returns every validation failure for a draft, in field order.
pub fn validation_errors(activity: &Activity) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if activity.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    if activity.calories.is_nan() || activity.calories <= 0.0 {
        errors.push(ValidationError::NonPositiveCalories);
    }
    errors
}

/// Returns `true` if the draft may be submitted.
pub fn is_valid_activity(activity: &Activity) -> bool {
    validate_activity(activity).is_ok()
}
