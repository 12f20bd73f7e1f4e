//! The week x slot loop that drives one major at a time through its template and replacement
//! pool, consulting the constraint oracle and mutating the shared occupancy state.

use crate::scheduler::oracle;
use crate::scheduler::template::MajorPlan;
use crate::types::{Catalog, MajorId, Occupancy, TimetableEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// A logged, non-fatal failure to place one attempt.
#[derive(Debug, Clone)]
pub struct Conflict {
    pub major_id: MajorId,
    pub week: u32,
    pub timeslot_id: crate::types::TimeSlotId,
    pub reason: String,
}

/// An assignment that still had sessions remaining when the run ended.
#[derive(Debug, Clone)]
pub struct Uncompleted {
    pub assignment_id: crate::types::AssignmentId,
    pub major_id: MajorId,
    pub remaining: u32,
}

/// Everything produced by scheduling one major.
#[derive(Debug, Default)]
pub struct MajorResult {
    pub entries: Vec<TimetableEntry>,
    pub conflicts: Vec<Conflict>,
    pub uncompleted: Vec<Uncompleted>,
}

/// Runs the week x slot loop for one major against the shared occupancy state.
///
/// `plan` is consumed: its template and pool are drained as sessions get placed or exhausted.
pub fn schedule_major(
    catalog: &Catalog,
    occupancy: &mut Occupancy,
    major_id: MajorId,
    mut plan: MajorPlan,
    rng: &mut impl Rng,
) -> MajorResult {
    let mut result = MajorResult::default();
    let slots = catalog.sorted_timeslots();

    for week in 1..=catalog.semester.total_weeks {
        for slot in &slots {
            let from_template = plan
                .template
                .get(&slot.id)
                .filter(|p| p.remaining > 0)
                .is_some();

            let candidate_index = if from_template {
                None
            } else {
                plan.pool.iter().position(|p| {
                    p.remaining > 0
                        && !catalog.approved_avoid.contains(
                            p.assignment.teacher_id,
                            slot.id,
                            p.assignment.semester_id,
                        )
                })
            };

            let mut pending = if from_template {
                match plan.template.get(&slot.id) {
                    Some(p) => p.clone(),
                    None => continue,
                }
            } else if let Some(idx) = candidate_index {
                plan.pool.remove(idx)
            } else {
                continue;
            };

            let room = oracle::find_room(catalog, occupancy, &pending.assignment, week, slot.id, rng);
            let Some(classroom_id) = room else {
                let reason = format!(
                    "no suitable room (capacity {})",
                    pending.assignment.expected_students
                );
                debug!(
                    major_id = major_id.0,
                    assignment_id = pending.assignment.id.0,
                    week,
                    timeslot_id = slot.id.0,
                    reason = %reason,
                    "placement attempt refused"
                );
                result.conflicts.push(Conflict {
                    major_id,
                    week,
                    timeslot_id: slot.id,
                    reason,
                });
                if !from_template {
                    plan.pool.push(pending);
                }
                continue;
            };

            match oracle::check(
                catalog,
                occupancy,
                &pending.assignment,
                week,
                slot.id,
                classroom_id,
            ) {
                Err(reason) => {
                    debug!(
                        major_id = major_id.0,
                        assignment_id = pending.assignment.id.0,
                        week,
                        timeslot_id = slot.id.0,
                        reason,
                        "placement attempt refused"
                    );
                    result.conflicts.push(Conflict {
                        major_id,
                        week,
                        timeslot_id: slot.id,
                        reason: reason.to_string(),
                    });
                    if !from_template {
                        plan.pool.push(pending);
                    }
                    continue;
                }
                Ok(()) => {
                    occupancy.occupy(
                        pending.assignment.teacher_id,
                        classroom_id,
                        major_id,
                        week,
                        slot.id,
                    );
                    result.entries.push(TimetableEntry {
                        semester_id: pending.assignment.semester_id,
                        major_id,
                        course_id: pending.assignment.course_id,
                        teacher_id: pending.assignment.teacher_id,
                        classroom_id,
                        timeslot_id: slot.id,
                        week_number: week,
                        assignment_id: pending.assignment.id,
                    });
                    pending.remaining -= 1;

                    if from_template {
                        if pending.remaining == 0 {
                            plan.template.remove(&slot.id);
                        } else {
                            plan.template.insert(slot.id, pending);
                        }
                    } else if pending.remaining > 0 {
                        plan.pool.push(pending);
                    }
                }
            }
        }

        plan.pool.shuffle(rng);
    }

    for pending in plan.template.into_values().chain(plan.pool) {
        if pending.remaining > 0 {
            result.uncompleted.push(Uncompleted {
                assignment_id: pending.assignment.id,
                major_id,
                remaining: pending.remaining,
            });
        }
    }

    tracing::info!(
        major_id = major_id.0,
        scheduled = result.entries.len(),
        conflicts = result.conflicts.len(),
        uncompleted = result.uncompleted.len(),
        "major scheduling pass complete"
    );

    result
}
