//! Care subject model.
//!
//! A care subject is the pet a set of tasks exists for. Subjects own their
//! tasks in insertion order and stamp their id onto every task they take,
//! which is how a completed recurring task finds its way back to the right
//! animal.

use serde::{Deserialize, Serialize};

use super::Task;

/// A pet (or other animal) receiving care.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareSubject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Species label (e.g., "Dog", "Cat").
    pub species: String,
    /// Owned tasks, in insertion order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl CareSubject {
    /// Creates a subject with no tasks.
    pub fn new(id: impl Into<String>, name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            tasks: Vec::new(),
        }
    }

    /// Adds a task, stamping this subject's id as its owner.
    pub fn add_task(&mut self, mut task: Task) {
        task.subject_id = Some(self.id.clone());
        self.tasks.push(task);
    }

    /// Builder form of [`add_task`](Self::add_task).
    pub fn with_task(mut self, task: Task) -> Self {
        self.add_task(task);
        self
    }

    /// Tasks not yet completed, in insertion order.
    pub fn incomplete_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.completed).collect()
    }

    /// Number of owned tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskCategory;
    use chrono::NaiveDate;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
    }

    fn make_task(id: &str, name: &str) -> Task {
        Task::new(id, name, TaskCategory::Feeding, 10, due())
    }

    #[test]
    fn test_add_task_stamps_ownership() {
        let mut subject = CareSubject::new("max", "Max", "Dog");
        subject.add_task(make_task("t1", "Feed breakfast"));

        assert_eq!(subject.task_count(), 1);
        assert_eq!(subject.tasks[0].subject_id.as_deref(), Some("max"));
    }

    #[test]
    fn test_add_task_restamps_foreign_task() {
        let mut task = make_task("t1", "Feed breakfast");
        task.subject_id = Some("someone-else".into());

        let mut subject = CareSubject::new("max", "Max", "Dog");
        subject.add_task(task);

        assert_eq!(subject.tasks[0].subject_id.as_deref(), Some("max"));
    }

    #[test]
    fn test_tasks_keep_insertion_order() {
        let subject = CareSubject::new("luna", "Luna", "Cat")
            .with_task(make_task("t1", "Feed breakfast"))
            .with_task(make_task("t2", "Clean litter"))
            .with_task(make_task("t3", "Evening play"));

        let ids: Vec<&str> = subject.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t1", "t2", "t3"]);
    }

    #[test]
    fn test_incomplete_tasks_filters_completed() {
        let mut subject = CareSubject::new("luna", "Luna", "Cat")
            .with_task(make_task("t1", "Feed breakfast"))
            .with_task(make_task("t2", "Clean litter"));
        subject.tasks[0].completed = true;

        let incomplete = subject.incomplete_tasks();
        assert_eq!(incomplete.len(), 1);
        assert_eq!(incomplete[0].id, "t2");
    }
}
