//! Top-level routine sequencing loader -> per-major scheduling -> persistence -> preference
//! finalization, producing the structured run summary.

pub mod engine;
pub mod oracle;
pub mod template;

#[cfg(test)]
mod proptests;

use crate::error::SchedulerError;
use crate::loader;
use crate::persistence;
use crate::types::{RunStatus, RunSummary, SemesterId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::PgPool;
use tracing::instrument;

pub use engine::{Conflict, MajorResult, Uncompleted};

/// Knobs for one run. `seed` makes the run fully reproducible; without one, a fresh seed is
/// drawn from the OS so results still vary but remain valid.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub seed: Option<u64>,
}

/// Runs the scheduler for one semester end to end: load, clear, schedule every major against a
/// shared occupancy state, persist, and finalize preferences in an always-executed epilogue.
#[instrument(skip(pool), fields(semester_id = semester_id.0))]
pub async fn run_semester(
    pool: &PgPool,
    semester_id: SemesterId,
    options: RunOptions,
) -> RunSummary {
    let catalog = match loader::load_catalog(pool, semester_id).await {
        Ok(catalog) => catalog,
        Err(SchedulerError::InvalidSemester { reason, .. }) => {
            return RunSummary::invalid_semester(format!("semester is not schedulable: {reason}"))
        }
        Err(err) => return RunSummary::error(err.to_string()),
    };

    if !catalog.semester.is_schedulable() {
        return RunSummary::invalid_semester(format!(
            "semester {} has total_weeks = 0",
            semester_id.0
        ));
    }

    let total_assignments: usize = catalog.assignments_by_major.values().map(Vec::len).sum();
    if total_assignments == 0 {
        return RunSummary::no_work(format!(
            "semester {} has no course assignments",
            semester_id.0
        ));
    }

    let cleared = match persistence::clear_entries(pool, semester_id).await {
        Ok(count) => count,
        Err(err) => {
            finalize_epilogue(pool).await;
            return RunSummary::error(err.to_string());
        }
    };

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut occupancy = crate::types::Occupancy::new();
    let mut all_entries = Vec::new();
    let mut conflicts: Vec<Conflict> = Vec::new();
    let mut uncompleted: Vec<Uncompleted> = Vec::new();
    let mut details = Vec::new();
    let mut processed_majors = 0u32;

    for major in catalog.majors_in_order() {
        let plan = template::build_plan(&catalog, major.id, &mut rng);
        let result = engine::schedule_major(&catalog, &mut occupancy, major.id, plan, &mut rng);

        details.push(format!(
            "{}: {} scheduled, {} conflicts, {} uncompleted",
            major.name,
            result.entries.len(),
            result.conflicts.len(),
            result.uncompleted.len()
        ));

        all_entries.extend(result.entries);
        conflicts.extend(result.conflicts);
        uncompleted.extend(result.uncompleted);
        processed_majors += 1;
    }

    let saved = match persistence::save_entries(pool, &all_entries).await {
        Ok(count) => count,
        Err(err) => {
            finalize_epilogue(pool).await;
            return RunSummary::error(err.to_string());
        }
    };

    finalize_epilogue(pool).await;

    let message = if uncompleted.is_empty() {
        format!("scheduled {} entries across {} majors", saved, processed_majors)
    } else {
        format!(
            "scheduled {} entries across {} majors; {} assignments left uncompleted",
            saved,
            processed_majors,
            uncompleted.len()
        )
    };

    RunSummary {
        status: RunStatus::Success,
        message,
        processed_majors,
        total_scheduled_entries: saved as u32,
        total_conflicts: conflicts.len() as u32,
        total_uncompleted_tasks: uncompleted.len() as u32,
        db_records_cleared: cleared as u32,
        db_records_saved: saved as u32,
        details,
    }
}

async fn finalize_epilogue(pool: &PgPool) {
    if let Err(err) = persistence::finalize_preferences(pool).await {
        tracing::warn!(error = %err, "preference finalization failed");
    }
}
