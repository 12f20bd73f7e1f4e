use thiserror::Error;

/// Domain-specific errors for the scheduler.
///
/// Only the fatal/soft-fail members of the §7 taxonomy are represented here as `Err` variants.
/// `ConstraintConflict`, `NoRoomAvailable`, and `UncompletedAssignment` are plain data collected
/// during a run (see [`crate::scheduler::Conflict`] and [`crate::scheduler::Uncompleted`]); the
/// engine never returns them as errors.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("database access failed: {0}")]
    DataAccess(#[source] sqlx::Error),

    #[error("semester {semester_id} is not schedulable: {reason}")]
    InvalidSemester { semester_id: i32, reason: String },

    #[error("semester {semester_id} has no course assignments")]
    NoWork { semester_id: i32 },

    #[error("failed to persist timetable entries: {0}")]
    Persistence(#[source] sqlx::Error),
}

impl From<sqlx::Error> for SchedulerError {
    fn from(err: sqlx::Error) -> Self {
        SchedulerError::DataAccess(err)
    }
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
