//! Timetable scheduler - constraint-based university session scheduler.
//!
//! This crate is the core scheduling engine consumed by an HTTP API layer (not part of this
//! crate). Given a semester's course assignments and a catalog of rooms, time slots, and teacher
//! preferences, it places every required session into a concrete (week, time-slot, classroom)
//! triple while honoring hard resource constraints.
//!
//! # Algorithm overview
//!
//! A scheduling run works in phases, driven by the orchestrator in [`scheduler::run_semester`]:
//! 1. **Load**: read the semester's catalog from Postgres.
//! 2. **Template**: build an advisory per-major `(day, period) -> assignment` map plus a
//!    replacement pool of leftover assignments.
//! 3. **Engine**: walk every week and slot, consulting the template then the pool, checking
//!    constraints via the oracle, and mutating a run-scoped occupancy state shared across majors.
//! 4. **Persist**: replace the semester's prior timetable entries with the new ones.
//! 5. **Finalize**: best-effort mark teacher preferences as applied.
//!
//! # Example
//!
//! ```no_run
//! use timetable_scheduler::scheduler::{run_semester, RunOptions};
//! use timetable_scheduler::types::SemesterId;
//!
//! # async fn demo(pool: sqlx::PgPool) {
//! let summary = run_semester(&pool, SemesterId(1), RunOptions::default()).await;
//! println!("{:?}: {}", summary.status, summary.message);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod persistence;
pub mod scheduler;
pub mod types;

pub use error::{Result, SchedulerError};
