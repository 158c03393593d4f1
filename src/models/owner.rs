//! Owner aggregate.
//!
//! The owner is the single actor whose time everything competes for: one
//! daily minute budget shared across every subject's tasks. The owner is also
//! where recurring-task recreation is routed. Completing a task resolves the
//! owning subject by id and appends the successor occurrence there, so the
//! chain survives without any live back-pointers between tasks and subjects.

use serde::{Deserialize, Serialize};

use super::{CareSubject, Task};

/// The person caring for one or more subjects under a daily time budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    /// Unique owner identifier.
    pub id: String,
    /// Minutes of care time available per day.
    pub available_time_minutes: u32,
    /// Care subjects, in insertion order.
    #[serde(default)]
    pub subjects: Vec<CareSubject>,
}

impl Owner {
    /// Creates an owner with no subjects.
    pub fn new(id: impl Into<String>, available_time_minutes: u32) -> Self {
        Self {
            id: id.into(),
            available_time_minutes,
            subjects: Vec::new(),
        }
    }

    /// Adds a care subject.
    pub fn add_subject(&mut self, subject: CareSubject) {
        self.subjects.push(subject);
    }

    /// Builder form of [`add_subject`](Self::add_subject).
    pub fn with_subject(mut self, subject: CareSubject) -> Self {
        self.add_subject(subject);
        self
    }

    /// Finds a subject by id.
    pub fn subject(&self, subject_id: &str) -> Option<&CareSubject> {
        self.subjects.iter().find(|s| s.id == subject_id)
    }

    /// Finds a subject by id, mutably.
    pub fn subject_mut(&mut self, subject_id: &str) -> Option<&mut CareSubject> {
        self.subjects.iter_mut().find(|s| s.id == subject_id)
    }

    /// Finds a task by id anywhere in the aggregate.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.all_tasks().into_iter().find(|t| t.id == task_id)
    }

    fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.subjects
            .iter_mut()
            .flat_map(|s| s.tasks.iter_mut())
            .find(|t| t.id == task_id)
    }

    /// Every task of every subject, in subject order then insertion order.
    ///
    /// This is the snapshot the [`scheduler`](crate::scheduler) operations
    /// take as input; its order is what stable sorts tie-break on.
    pub fn all_tasks(&self) -> Vec<&Task> {
        self.subjects.iter().flat_map(|s| s.tasks.iter()).collect()
    }

    /// The flattened view restricted to incomplete tasks.
    pub fn incomplete_tasks(&self) -> Vec<&Task> {
        self.subjects
            .iter()
            .flat_map(|s| s.tasks.iter())
            .filter(|t| !t.completed)
            .collect()
    }

    /// Appends a task to the named subject, stamping ownership.
    ///
    /// Hands the task back as `Err` when no subject has that id.
    pub fn add_task(&mut self, subject_id: &str, task: Task) -> Result<(), Task> {
        match self.subject_mut(subject_id) {
            Some(subject) => {
                subject.add_task(task);
                Ok(())
            }
            None => Err(task),
        }
    }

    /// Completes a task and inserts its successor occurrence, if any.
    ///
    /// Looks the task up anywhere in the aggregate and flips its completion
    /// flag. For an incomplete `Daily`/`Weekly` task whose subject still
    /// resolves, exactly one successor is appended to that subject's task
    /// list and a reference to it is returned.
    ///
    /// Returns `None` when the task is unknown, already completed, one-time,
    /// or its subject id no longer resolves. Completion itself still happens
    /// in the last case; only the recreation is skipped.
    pub fn complete_task(&mut self, task_id: &str) -> Option<&Task> {
        let successor = self.task_mut(task_id)?.complete()?;
        let subject_id = successor.subject_id.clone()?;
        let subject = self.subject_mut(&subject_id)?;
        subject.tasks.push(successor);
        subject.tasks.last()
    }
}
