//! Stateless scheduling operations.
//!
//! Every operation here is a pure function of the snapshot it is given:
//! ordering, filtering, greedy plan generation, and conflict detection.
//! Mutation (completing tasks, inserting recurrence successors) lives on the
//! aggregates in [`crate::models`], never here, so any of these may run on a
//! shared snapshot without coordination.
//!
//! # Algorithm
//!
//! `generate_plan` is a greedy, priority-driven selection under a minute
//! budget. It is not optimal packing, but it is deterministic, explainable
//! line by line, and right-sized for a household's task list.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 14
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4 (interval
//!   scheduling and greedy exchange arguments)

mod conflict;
mod filter;
mod ordering;
mod planner;

pub use conflict::{detect_conflicts, Conflict, ConflictReport, TimeSlot, Truncation};
pub use filter::{filter_by_category, filter_by_status, filter_by_subject};
pub use ordering::{order_by_priority, order_by_time};
pub use planner::generate_plan;
