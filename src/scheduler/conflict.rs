//! Same-day conflict detection.
//!
//! Two scheduled tasks conflict when their time ranges overlap, meaning each
//! starts strictly before the other ends. Ranges that merely touch share no
//! minute and do not conflict. Only incomplete tasks with a scheduled time
//! participate, and the scan runs across every care subject: the owner, not
//! the pet, is the one who cannot be in two places at once.
//!
//! # Algorithm
//! Order the eligible tasks by start time, then compare every pair. The
//! O(n^2) scan is fine at household scale and reports pairs in a stable,
//! obvious order; a sweep line would only pay off at thousands of tasks.

use serde::{Deserialize, Serialize};

use super::ordering::order_by_time;
use crate::models::{Owner, Task, MINUTES_PER_DAY};

/// Last representable minute of day; clamped end times land here.
const LAST_MINUTE: u16 = MINUTES_PER_DAY - 1;

/// A task's occupied range within one day, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start minute of day.
    pub start: u16,
    /// End minute used for comparison, clamped to 23:59 when the nominal
    /// end would run past midnight.
    pub end: u16,
    /// Whether `end` was clamped.
    pub truncated: bool,
}

impl TimeSlot {
    /// Builds the slot for a start minute and a duration.
    pub fn new(start: u16, duration_minutes: u32) -> Self {
        let nominal = u32::from(start).saturating_add(duration_minutes);
        if nominal > u32::from(LAST_MINUTE) {
            Self { start, end: LAST_MINUTE, truncated: true }
        } else {
            Self { start, end: nominal as u16, truncated: false }
        }
    }

    /// Strict interval overlap: each slot starts before the other ends.
    ///
    /// Touching slots (`self.end == other.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One flagged pair of overlapping tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Id of the earlier-starting task of the pair.
    pub first_task_id: String,
    /// Id of the later-starting task.
    pub second_task_id: String,
    /// Description naming both tasks, their subjects, and their time ranges.
    pub message: String,
}

/// A warning for a task whose nominal end ran past the end of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truncation {
    /// Affected task id.
    pub task_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Outcome of a conflict scan.
///
/// Finding conflicts is a normal outcome, not an error: an empty report is
/// the all-clear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Flagged pairs, ordered by start time of the earlier task.
    pub conflicts: Vec<Conflict>,
    /// End-of-day truncation warnings, ordered by start time.
    pub truncations: Vec<Truncation>,
}

impl ConflictReport {
    /// Whether no overlap was found. Truncation warnings do not count
    /// against a clear scan.
    pub fn is_clear(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of flagged pairs.
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    /// Renders the report as a short plain-text summary.
    pub fn summary(&self) -> String {
        let mut out = if self.is_clear() {
            String::from("no scheduling conflicts detected")
        } else {
            let mut s = format!("{} scheduling conflict(s) detected:", self.conflicts.len());
            for conflict in &self.conflicts {
                s.push_str("\n  - ");
                s.push_str(&conflict.message);
            }
            s
        };
        for truncation in &self.truncations {
            out.push_str("\n  note: ");
            out.push_str(&truncation.message);
        }
        out
    }
}

/// Scans an owner's tasks for same-day overlaps.
///
/// Eligible tasks are the incomplete ones that carry a scheduled time;
/// completed and unscheduled tasks never conflict. Each overlapping pair is
/// flagged exactly once, with the earlier-starting task listed first. The
/// flagged pairs do not depend on the order tasks were added in.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use pawplan::models::{CareSubject, Owner, Task, TaskCategory};
/// use pawplan::scheduler::detect_conflicts;
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
/// let owner = Owner::new("jordan", 120).with_subject(
///     CareSubject::new("max", "Max", "Dog")
///         .with_task(
///             Task::new("walk-1", "Morning walk", TaskCategory::Walk, 30, today)
///                 .with_scheduled_time(7 * 60),
///         )
///         .with_task(
///             Task::new("feed-1", "Feed breakfast", TaskCategory::Feeding, 15, today)
///                 .with_scheduled_time(7 * 60 + 15),
///         ),
/// );
///
/// let report = detect_conflicts(&owner);
/// assert_eq!(report.conflict_count(), 1);
/// ```
pub fn detect_conflicts(owner: &Owner) -> ConflictReport {
    let mut report = ConflictReport::default();

    let snapshot = owner.all_tasks();
    let eligible: Vec<&Task> = snapshot
        .iter()
        .filter(|t| !t.completed && t.scheduled_time.is_some())
        .copied()
        .collect();

    let slotted: Vec<(&Task, TimeSlot)> = order_by_time(&eligible)
        .into_iter()
        .filter_map(|t| {
            t.scheduled_time
                .map(|start| (t, TimeSlot::new(start, t.duration_minutes)))
        })
        .collect();

    for (task, slot) in &slotted {
        if slot.truncated {
            report.truncations.push(Truncation {
                task_id: task.id.clone(),
                message: format!(
                    "{} ({}) runs past the end of the day; treated as ending at {}",
                    task.name,
                    subject_label(owner, task),
                    format_minute(slot.end)
                ),
            });
        }
    }

    for i in 0..slotted.len() {
        for j in (i + 1)..slotted.len() {
            let (first, first_slot) = &slotted[i];
            let (second, second_slot) = &slotted[j];
            if first_slot.overlaps(second_slot) {
                report.conflicts.push(Conflict {
                    first_task_id: first.id.clone(),
                    second_task_id: second.id.clone(),
                    message: format!(
                        "{} ({}, {}) overlaps {} ({}, {})",
                        first.name,
                        subject_label(owner, first),
                        format_range(first_slot),
                        second.name,
                        subject_label(owner, second),
                        format_range(second_slot)
                    ),
                });
            }
        }
    }

    report
}

fn subject_label(owner: &Owner, task: &Task) -> String {
    match task.subject_id.as_deref() {
        Some(id) => owner
            .subject(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string()),
        None => String::from("unowned"),
    }
}

fn format_minute(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn format_range(slot: &TimeSlot) -> String {
    format!("{}-{}", format_minute(slot.start), format_minute(slot.end))
}
