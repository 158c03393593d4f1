//! Snapshot filters.
//!
//! Pure, order-preserving selections over a task snapshot. Each filter walks
//! the slice once and returns the surviving references; the snapshot itself
//! is never touched, so filters compose freely with the ordering policies.

use crate::models::{Task, TaskCategory};

/// Keeps tasks whose completion flag matches `completed`.
pub fn filter_by_status<'a>(tasks: &[&'a Task], completed: bool) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.completed == completed)
        .copied()
        .collect()
}

/// Keeps tasks owned by the given care subject.
pub fn filter_by_subject<'a>(tasks: &[&'a Task], subject_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.subject_id.as_deref() == Some(subject_id))
        .copied()
        .collect()
}

/// Keeps tasks of one care category.
pub fn filter_by_category<'a>(tasks: &[&'a Task], category: TaskCategory) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.category == category)
        .copied()
        .collect()
}
