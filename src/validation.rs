//! Input validation for the planning engine.
//!
//! The scheduling operations are total functions over well-formed input;
//! this boundary is what makes "well-formed" checkable before planning.
//! Detects:
//! - Duplicate subject and task IDs
//! - Zero durations
//! - Priorities outside 1..=5
//! - Scheduled times past the end of the day
//! - Ownership stamps that disagree with the subject holding the task

use std::collections::HashSet;

use crate::models::{Owner, MINUTES_PER_DAY};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A task's duration is zero.
    InvalidDuration,
    /// A task's priority is outside 1..=5.
    InvalidPriority,
    /// A scheduled time is not a minute of day (0..=1439).
    InvalidTime,
    /// A task's ownership stamp does not match the subject holding it.
    OwnershipMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an owner aggregate before planning.
///
/// Checks:
/// 1. No duplicate subject IDs
/// 2. No duplicate task IDs (across all subjects)
/// 3. Every duration is positive
/// 4. Every priority is within 1..=5
/// 5. Every scheduled time is within 0..=1439
/// 6. Every task's `subject_id` matches the subject holding it
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_owner(owner: &Owner) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    let mut task_ids = HashSet::new();

    for subject in &owner.subjects {
        if !subject_ids.insert(subject.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", subject.id),
            ));
        }

        for task in &subject.tasks {
            if !task_ids.insert(task.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate task ID: {}", task.id),
                ));
            }

            if task.duration_minutes == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDuration,
                    format!("Task '{}' has zero duration", task.id),
                ));
            }

            if !(1..=5).contains(&task.priority) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPriority,
                    format!(
                        "Task '{}' has priority {} (expected 1..=5)",
                        task.id, task.priority
                    ),
                ));
            }

            if let Some(minute) = task.scheduled_time {
                if minute >= MINUTES_PER_DAY {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidTime,
                        format!(
                            "Task '{}' has scheduled time {} (expected 0..=1439)",
                            task.id, minute
                        ),
                    ));
                }
            }

            if task.subject_id.as_deref() != Some(subject.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OwnershipMismatch,
                    format!(
                        "Task '{}' is held by subject '{}' but stamped for '{}'",
                        task.id,
                        subject.id,
                        task.subject_id.as_deref().unwrap_or("nobody")
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
