//! Clears prior entries for a semester, batch-inserts new ones, and best-effort finalizes
//! teacher preferences. Each of the three operations runs in its own transaction.

use crate::error::{Result, SchedulerError};
use crate::types::{SemesterId, TimetableEntry};
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

const INSERT_PAGE_SIZE: usize = 100;

/// Deletes every `timetable_entries` row for `semester_id` inside one transaction, returning
/// the number of rows removed.
#[instrument(skip(pool), fields(semester_id = semester_id.0))]
pub async fn clear_entries(pool: &PgPool, semester_id: SemesterId) -> Result<u64> {
    let mut tx = pool.begin().await.map_err(SchedulerError::Persistence)?;
    let result = sqlx::query("DELETE FROM timetable_entries WHERE semester_id = $1")
        .bind(semester_id.0)
        .execute(&mut *tx)
        .await
        .map_err(SchedulerError::Persistence)?;
    tx.commit().await.map_err(SchedulerError::Persistence)?;
    Ok(result.rows_affected())
}

/// Batch-inserts every successful entry for the semester in pages of `INSERT_PAGE_SIZE`,
/// committing only once all pages succeed.
#[instrument(skip(pool, entries), fields(count = entries.len()))]
pub async fn save_entries(pool: &PgPool, entries: &[TimetableEntry]) -> Result<u64> {
    if entries.is_empty() {
        return Ok(0);
    }
    let mut tx = pool.begin().await.map_err(SchedulerError::Persistence)?;
    let mut saved = 0u64;
    for page in entries.chunks(INSERT_PAGE_SIZE) {
        let mut builder = QueryBuilder::new(
            "INSERT INTO timetable_entries (semester_id, major_id, course_id, teacher_id, classroom_id, timeslot_id, week_number, assignment_id) ",
        );
        builder.push_values(page, |mut row, entry| {
            row.push_bind(entry.semester_id.0)
                .push_bind(entry.major_id.0)
                .push_bind(entry.course_id.0)
                .push_bind(entry.teacher_id.0)
                .push_bind(entry.classroom_id.0)
                .push_bind(entry.timeslot_id.0)
                .push_bind(entry.week_number as i32)
                .push_bind(entry.assignment_id.0);
        });
        builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(SchedulerError::Persistence)?;
        saved += page.len() as u64;
    }
    tx.commit().await.map_err(SchedulerError::Persistence)?;
    Ok(saved)
}

/// Best-effort marks every teacher-scheduling-preference row as applied, scoped as broadly as
/// the current implementation does: all rows, not just the ones touched by this run.
///
/// Runs in its own transaction after the main run. A failure here is logged but never changes
/// the run's summary status.
#[instrument(skip(pool))]
pub async fn finalize_preferences(pool: &PgPool) -> Result<u64> {
    let mut tx = pool.begin().await.map_err(SchedulerError::Persistence)?;
    let result = sqlx::query("UPDATE teacher_scheduling_preferences SET status = 'applied'")
        .execute(&mut *tx)
        .await
        .map_err(SchedulerError::Persistence)?;
    tx.commit().await.map_err(SchedulerError::Persistence)?;
    Ok(result.rows_affected())
}
