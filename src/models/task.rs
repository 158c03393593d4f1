//! Care task model.
//!
//! A task is the schedulable unit: one concrete act of care (a walk, a meal,
//! a pill) with a duration, a priority, and a recurrence policy that decides
//! whether completing it spawns the next occurrence.
//!
//! # Time Representation
//! Durations and budgets are whole minutes. A task may carry a planned
//! minute-of-day (0..=1439); tasks without one are "unscheduled" and take no
//! part in conflict detection. Due dates are plain calendar dates, always
//! supplied by the caller so the engine never reads a clock.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of minutes in a day. Valid scheduled times are below this.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Kind of care a task provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    /// Exercise outside.
    Walk,
    /// Meals and water.
    Feeding,
    /// Medication doses.
    Medication,
    /// Brushing, bathing, litter.
    Grooming,
    /// Play and training.
    Enrichment,
    /// Veterinary appointments.
    VetVisit,
}

/// How a task repeats after completion.
///
/// Completing a `Daily` or `Weekly` task that belongs to a care subject
/// synthesizes exactly one successor occurrence, due one or seven days after
/// the completed occurrence. `None` tasks end their chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrencePolicy {
    /// One-time task; no successor on completion.
    #[default]
    None,
    /// Successor due the next day.
    Daily,
    /// Successor due seven days later.
    Weekly,
}

impl RecurrencePolicy {
    /// Days between an occurrence and its successor (`None` for one-time tasks).
    pub fn interval_days(self) -> Option<u64> {
        match self {
            RecurrencePolicy::None => None,
            RecurrencePolicy::Daily => Some(1),
            RecurrencePolicy::Weekly => Some(7),
        }
    }
}

/// A single care task.
///
/// Tasks are identified by `id`, never by `name`: a recurring chain reuses
/// the name across occurrences. The owning [`CareSubject`](super::CareSubject)
/// is referenced by id (`subject_id`), stamped when the task is added to a
/// subject; the model holds no live back-pointers.
///
/// A completed task is read-only by contract: recreation produces a new task
/// with a fresh identity and never touches the completed one again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier. Caller-assigned for authored tasks;
    /// recreated occurrences carry generated UUIDs.
    pub id: String,
    /// Display name; repeats across occurrences of a recurring task.
    pub name: String,
    /// Care category.
    pub category: TaskCategory,
    /// Time the task takes, in minutes (positive).
    pub duration_minutes: u32,
    /// Importance, 1..=5 (5 = highest).
    pub priority: u8,
    /// Recreation policy applied on completion.
    #[serde(default)]
    pub recurrence: RecurrencePolicy,
    /// Planned minute of day (0..=1439). `None` = unscheduled.
    #[serde(default)]
    pub scheduled_time: Option<u16>,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// Whether the task has been done.
    #[serde(default)]
    pub completed: bool,
    /// Id of the owning care subject; `None` until added to one.
    #[serde(default)]
    pub subject_id: Option<String>,
}

impl Task {
    /// Creates a task due on the given date.
    ///
    /// Priority defaults to 3 (the midpoint); recurrence defaults to
    /// [`RecurrencePolicy::None`]; the task starts unscheduled, incomplete,
    /// and unowned. Builders do not validate: the
    /// [`validation`](crate::validation) boundary does.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: TaskCategory,
        duration_minutes: u32,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            duration_minutes,
            priority: 3,
            recurrence: RecurrencePolicy::None,
            scheduled_time: None,
            due_date,
            completed: false,
            subject_id: None,
        }
    }

    /// Sets the priority (1..=5, 5 = highest).
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the recurrence policy.
    pub fn with_recurrence(mut self, recurrence: RecurrencePolicy) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Sets the planned minute of day (0..=1439).
    pub fn with_scheduled_time(mut self, minute_of_day: u16) -> Self {
        self.scheduled_time = Some(minute_of_day);
        self
    }

    /// Whether the task fits in the remaining budget. Pure, no side effect.
    #[inline]
    pub fn fits(&self, remaining_minutes: u32) -> bool {
        self.duration_minutes <= remaining_minutes
    }

    /// Marks the task complete and synthesizes its successor occurrence.
    ///
    /// Returns the successor for a `Daily`/`Weekly` task that belongs to a
    /// subject; the successor is **not** inserted anywhere, that is the
    /// caller's job (normally [`Owner::complete_task`](super::Owner::complete_task)).
    ///
    /// Completing an already-completed task is a no-op returning `None`, so
    /// repeated calls cannot fork duplicate chains.
    pub fn complete(&mut self) -> Option<Task> {
        if self.completed {
            return None;
        }
        self.completed = true;
        self.next_occurrence()
    }

    /// Synthesizes the successor occurrence without completing this task.
    ///
    /// `None` for one-time tasks and for tasks that belong to no subject.
    /// The successor keeps the name, category, duration, priority, recurrence,
    /// scheduled time, and subject of this task; its due date advances by the
    /// recurrence interval and it carries a fresh generated id.
    pub fn next_occurrence(&self) -> Option<Task> {
        let days = self.recurrence.interval_days()?;
        let subject_id = self.subject_id.clone()?;
        let due_date = self.due_date.checked_add_days(Days::new(days))?;
        Some(Task {
            id: Uuid::new_v4().to_string(),
            name: self.name.clone(),
            category: self.category,
            duration_minutes: self.duration_minutes,
            priority: self.priority,
            recurrence: self.recurrence,
            scheduled_time: self.scheduled_time,
            due_date,
            completed: false,
            subject_id: Some(subject_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily_walk() -> Task {
        let mut task =
            Task::new("walk-1", "Morning walk", TaskCategory::Walk, 30, date(2026, 2, 15))
                .with_priority(5)
                .with_recurrence(RecurrencePolicy::Daily)
                .with_scheduled_time(7 * 60);
        task.subject_id = Some("max".into());
        task
    }

    #[test]
    fn test_task_builder_defaults() {
        let task = Task::new("t1", "Brush fur", TaskCategory::Grooming, 8, date(2026, 2, 15));

        assert_eq!(task.id, "t1");
        assert_eq!(task.name, "Brush fur");
        assert_eq!(task.category, TaskCategory::Grooming);
        assert_eq!(task.duration_minutes, 8);
        assert_eq!(task.priority, 3);
        assert_eq!(task.recurrence, RecurrencePolicy::None);
        assert_eq!(task.scheduled_time, None);
        assert_eq!(task.due_date, date(2026, 2, 15));
        assert!(!task.completed);
        assert_eq!(task.subject_id, None);
    }

    #[test]
    fn test_fits_boundary() {
        let task = Task::new("t1", "Walk", TaskCategory::Walk, 30, date(2026, 2, 15));
        assert!(task.fits(30));
        assert!(task.fits(31));
        assert!(!task.fits(29));
        assert!(!task.fits(0));
    }

    #[test]
    fn test_complete_daily_creates_next_day_successor() {
        let mut task = daily_walk();
        let successor = task.complete().expect("daily task with subject recurs");

        assert!(task.completed);
        assert!(!successor.completed);
        assert_eq!(successor.due_date, date(2026, 2, 16));
        assert_eq!(successor.name, task.name);
        assert_eq!(successor.category, task.category);
        assert_eq!(successor.duration_minutes, task.duration_minutes);
        assert_eq!(successor.priority, task.priority);
        assert_eq!(successor.recurrence, task.recurrence);
        assert_eq!(successor.scheduled_time, task.scheduled_time);
        assert_eq!(successor.subject_id, task.subject_id);
        // New identity, not a mutation of the completed occurrence
        assert_ne!(successor.id, task.id);
    }

    #[test]
    fn test_complete_weekly_advances_seven_days() {
        let mut task = daily_walk().with_recurrence(RecurrencePolicy::Weekly);
        let successor = task.complete().unwrap();
        assert_eq!(successor.due_date, date(2026, 2, 22));
    }

    #[test]
    fn test_complete_one_time_no_successor() {
        let mut task = daily_walk().with_recurrence(RecurrencePolicy::None);
        assert!(task.complete().is_none());
        assert!(task.completed);
    }

    #[test]
    fn test_complete_without_subject_no_successor() {
        let mut task = daily_walk();
        task.subject_id = None;
        assert!(task.complete().is_none());
        assert!(task.completed);
    }

    #[test]
    fn test_complete_idempotent() {
        let mut task = daily_walk();
        assert!(task.complete().is_some());
        // Second completion must not fork another chain
        assert!(task.complete().is_none());
        assert!(task.completed);
    }

    #[test]
    fn test_next_occurrence_leaves_task_incomplete() {
        let task = daily_walk();
        let preview = task.next_occurrence().unwrap();
        assert!(!task.completed);
        assert_eq!(preview.due_date, date(2026, 2, 16));
    }

    #[test]
    fn test_recurrence_intervals() {
        assert_eq!(RecurrencePolicy::None.interval_days(), None);
        assert_eq!(RecurrencePolicy::Daily.interval_days(), Some(1));
        assert_eq!(RecurrencePolicy::Weekly.interval_days(), Some(7));
    }

    #[test]
    fn test_task_from_minimal_json() {
        // Collaborator records may omit every defaultable field
        let task: Task = serde_json::from_str(
            r#"{
                "id": "feed-1",
                "name": "Feed breakfast",
                "category": "Feeding",
                "duration_minutes": 10,
                "priority": 5,
                "due_date": "2026-02-15"
            }"#,
        )
        .unwrap();

        assert_eq!(task.recurrence, RecurrencePolicy::None);
        assert_eq!(task.scheduled_time, None);
        assert!(!task.completed);
        assert_eq!(task.subject_id, None);
        assert_eq!(task.due_date, date(2026, 2, 15));
    }
}
