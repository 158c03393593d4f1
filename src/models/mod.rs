//! Care-planning domain models.
//!
//! Provides the core data types of the engine: the task entity, the
//! subject/owner aggregates that hold tasks, and the schedule value object
//! that planning produces.
//!
//! # Ownership Shape
//!
//! | Type | Holds | Referenced by |
//! |------|-------|---------------|
//! | [`Owner`] | subjects (and the time budget) | caller |
//! | [`CareSubject`] | tasks, in insertion order | `Task::subject_id` |
//! | [`Task`] | nothing | `ScheduleEntry::task_id` |
//! | [`Schedule`] | entry snapshots, never tasks | caller |
//!
//! References run by id in one direction only, so the aggregate serializes
//! as a plain tree and mutation needs no interior mutability.

mod owner;
mod schedule;
mod subject;
mod task;

pub use owner::Owner;
pub use schedule::{Schedule, ScheduleEntry};
pub use subject::CareSubject;
pub use task::{RecurrencePolicy, Task, TaskCategory, MINUTES_PER_DAY};
