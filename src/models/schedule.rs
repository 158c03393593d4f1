//! Schedule (plan output) model.
//!
//! A schedule is the value a planning request returns: the tasks selected for
//! one date, the minutes they add up to, and the decision trace explaining
//! every accept and reject. Schedules reference tasks by id and never own
//! them; each planning request builds a fresh schedule, so there is no
//! removal operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Task, TaskCategory};

/// One selected task in a schedule.
///
/// References the task by id and denormalizes the fields reports need, so a
/// rendered schedule requires no lookups back into the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Selected task id.
    pub task_id: String,
    /// Owning subject id (`None` for tasks never added to a subject).
    pub subject_id: Option<String>,
    /// Task display name.
    pub name: String,
    /// Care category.
    pub category: TaskCategory,
    /// Duration in minutes.
    pub duration_minutes: u32,
    /// Priority (1..=5).
    pub priority: u8,
    /// Planned minute of day, when the task has one.
    pub scheduled_time: Option<u16>,
}

impl ScheduleEntry {
    /// Snapshots a task into an entry.
    pub fn from_task(task: &Task) -> Self {
        Self {
            task_id: task.id.clone(),
            subject_id: task.subject_id.clone(),
            name: task.name.clone(),
            category: task.category,
            duration_minutes: task.duration_minutes,
            priority: task.priority,
            scheduled_time: task.scheduled_time,
        }
    }
}

/// A daily care plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Date the plan targets.
    pub date: NaiveDate,
    /// Selected tasks, in selection order.
    pub entries: Vec<ScheduleEntry>,
    /// Sum of selected durations (minutes).
    pub total_duration_minutes: u32,
    /// Decision trace: one line per considered task plus a closing summary.
    pub rationale: Vec<String>,
}

impl Schedule {
    /// Creates an empty schedule for a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            total_duration_minutes: 0,
            rationale: Vec::new(),
        }
    }

    /// Appends a selected task and grows the running total.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.total_duration_minutes += entry.duration_minutes;
        self.entries.push(entry);
    }

    /// Appends a rationale line.
    pub fn add_rationale(&mut self, line: impl Into<String>) {
        self.rationale.push(line.into());
    }

    /// Number of selected tasks.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Ids of the selected tasks, in selection order.
    pub fn task_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.task_id.as_str()).collect()
    }

    /// Whether the plan fits within a budget.
    pub fn is_within_budget(&self, budget_minutes: u32) -> bool {
        self.total_duration_minutes <= budget_minutes
    }
}
