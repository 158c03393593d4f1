//! Daily plan generation.
//!
//! Builds a care plan by greedy selection under the owner's minute budget.
//!
//! # Algorithm
//! 1. Snapshot the owner's incomplete tasks.
//! 2. Order them by priority descending, duration ascending (stable).
//! 3. Walk the order once, accepting every task that still fits the
//!    remaining budget.
//!
//! Greedy selection never backtracks: a long high-priority task can consume
//! budget that two shorter lower-priority tasks would have used better. At
//! the scale of a household's care list the gap does not justify a packing
//! solver.
//!
//! # Complexity
//! O(n log n) for the ordering plus O(n) for the selection walk.

use chrono::NaiveDate;

use super::ordering::order_by_priority;
use crate::models::{Owner, Schedule, ScheduleEntry};

/// Builds the care plan for one date.
///
/// The returned schedule never exceeds the owner's budget. Every considered
/// task leaves one rationale line (accepted or rejected) and a closing line
/// sums up the outcome; an owner with no incomplete tasks yields an empty
/// schedule with no rationale at all. Deterministic: the same owner snapshot
/// and date always produce the same plan.
///
/// Tasks are never split: one that does not fit the remaining budget is
/// rejected whole, and later shorter tasks may still be accepted.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use pawplan::models::{CareSubject, Owner, Task, TaskCategory};
/// use pawplan::scheduler::generate_plan;
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
/// let owner = Owner::new("jordan", 45).with_subject(
///     CareSubject::new("max", "Max", "Dog")
///         .with_task(
///             Task::new("walk-1", "Morning walk", TaskCategory::Walk, 30, today)
///                 .with_priority(5),
///         )
///         .with_task(
///             Task::new("play-1", "Play fetch", TaskCategory::Enrichment, 20, today)
///                 .with_priority(3),
///         ),
/// );
///
/// let plan = generate_plan(&owner, today);
/// assert_eq!(plan.task_ids(), ["walk-1"]);
/// assert_eq!(plan.total_duration_minutes, 30);
/// ```
pub fn generate_plan(owner: &Owner, date: NaiveDate) -> Schedule {
    let mut schedule = Schedule::new(date);

    let candidates = owner.incomplete_tasks();
    if candidates.is_empty() {
        return schedule;
    }

    let budget = owner.available_time_minutes;
    let mut remaining = budget;
    let mut skipped: Vec<&str> = Vec::new();

    for task in order_by_priority(&candidates) {
        if task.fits(remaining) {
            remaining -= task.duration_minutes;
            schedule.add_rationale(format!(
                "accepted {}: priority={}, duration={}, remaining={}",
                task.name, task.priority, task.duration_minutes, remaining
            ));
            schedule.add_entry(ScheduleEntry::from_task(task));
        } else {
            schedule.add_rationale(format!(
                "rejected {}: duration={} exceeds remaining budget {}",
                task.name, task.duration_minutes, remaining
            ));
            skipped.push(task.name.as_str());
        }
    }

    let mut summary = format!(
        "scheduled {} task(s) using {}/{} minutes",
        schedule.entry_count(),
        schedule.total_duration_minutes,
        budget
    );
    if !skipped.is_empty() {
        summary.push_str(&format!("; could not fit: {}", skipped.join(", ")));
    }
    schedule.add_rationale(summary);

    schedule
}
