//! Care-task planning engine for pet households.
//!
//! Provides domain models, scheduling operations, and validation for planning
//! daily animal care under a single owner's time budget. This crate defines
//! the planning core only: task entry, rendering, and persistence belong to
//! the surrounding application, which hands aggregates in and gets schedules
//! and conflict reports back.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `CareSubject`, `Owner`, `Schedule`
//! - **`scheduler`**: Stateless operations — ordering, filtering,
//!   `generate_plan`, `detect_conflicts`
//! - **`validation`**: Input integrity checks (duplicate IDs, value ranges,
//!   ownership stamps)
//!
//! # Architecture
//!
//! All state lives in the [`models::Owner`] aggregate, a plain serializable
//! tree with id references running in one direction. The [`scheduler`]
//! operations are pure functions over snapshots of that tree, so reads need
//! no coordination; mutation is confined to the aggregate methods
//! (`add_task`, `complete_task`) and must be serialized per owner by the
//! embedder.
//!
//! Dates are always passed in by the caller. The engine never reads a clock,
//! which keeps every operation reproducible after the fact.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4

pub mod models;
pub mod scheduler;
pub mod validation;
