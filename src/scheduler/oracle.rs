//! Pure constraint-checking functions: no I/O, no mutation of anything but the caller-supplied
//! occupancy state, fully unit-testable in isolation from the rest of the run.

use crate::types::{Catalog, Classroom, CourseAssignment, Occupancy, RoomType, TimeSlotId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Outcome of [`check`]: either the placement is allowed, or it's refused with a reason string
/// matching the conflict vocabulary the engine logs verbatim.
pub type CheckResult = Result<(), &'static str>;

/// Checks a prospective (assignment, week, timeslot, room) placement against the shared
/// occupancy state and approved avoid-preferences, in the documented failure-reason order.
pub fn check(
    catalog: &Catalog,
    occupancy: &Occupancy,
    assignment: &CourseAssignment,
    week: u32,
    timeslot_id: TimeSlotId,
    classroom_id: crate::types::ClassroomId,
) -> CheckResult {
    if catalog
        .approved_avoid
        .contains(assignment.teacher_id, timeslot_id, assignment.semester_id)
    {
        return Err("teacher preference (avoid)");
    }
    if occupancy.teacher_busy(assignment.teacher_id, week, timeslot_id) {
        return Err("teacher conflict");
    }
    if occupancy.room_busy(classroom_id, week, timeslot_id) {
        return Err("room conflict");
    }
    if occupancy.major_busy(assignment.major_id, week, timeslot_id) {
        return Err("major conflict");
    }
    Ok(())
}

/// Selects a classroom for this assignment at this (week, timeslot), preferring a room whose
/// type matches the course's, falling back to any room with enough capacity.
///
/// Returns `None` when no free room meets the capacity requirement. Ties within the preferred
/// and fallback pools are broken uniformly at random via `rng`, which is the scheduler's
/// intentional diversification knob across repeated attempts.
pub fn find_room(
    catalog: &Catalog,
    occupancy: &Occupancy,
    assignment: &CourseAssignment,
    week: u32,
    timeslot_id: TimeSlotId,
    rng: &mut impl Rng,
) -> Option<crate::types::ClassroomId> {
    let course = catalog.courses.get(&assignment.course_id)?;
    let wants_lab = course.course_type.prefers_lab();

    let mut preferred: Vec<&Classroom> = Vec::new();
    let mut other: Vec<&Classroom> = Vec::new();

    for room in catalog.classrooms.values() {
        if occupancy.room_busy(room.id, week, timeslot_id) {
            continue;
        }
        if !room.fits(assignment.expected_students) {
            continue;
        }
        let is_lab = matches!(room.room_type, RoomType::Lab);
        if is_lab == wants_lab {
            preferred.push(room);
        } else {
            other.push(room);
        }
    }

    preferred
        .choose(rng)
        .or_else(|| other.choose(rng))
        .map(|room| room.id)
}
