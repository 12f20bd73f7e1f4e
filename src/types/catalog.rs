use super::{
    ApprovedAvoidSet, Classroom, ClassroomId, Course, CourseAssignment, CourseId, DayOfWeek,
    Major, MajorId, Semester, Teacher, TeacherId, TimeSlot, TimeSlotId,
};
use std::collections::HashMap;

/// In-memory snapshot of everything the scheduler needs for one run, keyed by identifier.
///
/// Loaded once up front and treated as read-only for the remainder of the run; only the
/// occupancy state and the per-major replacement pools mutate while scheduling proceeds.
#[derive(Debug)]
pub struct Catalog {
    pub semester: Semester,
    pub majors: Vec<Major>,
    pub teachers: HashMap<TeacherId, Teacher>,
    pub classrooms: HashMap<ClassroomId, Classroom>,
    pub courses: HashMap<CourseId, Course>,
    pub timeslots: HashMap<TimeSlotId, TimeSlot>,
    pub assignments_by_major: HashMap<MajorId, Vec<CourseAssignment>>,
    pub approved_avoid: ApprovedAvoidSet,
    timeslot_lookup: HashMap<(DayOfWeek, u32), TimeSlotId>,
}

impl Catalog {
    pub fn new(
        semester: Semester,
        majors: Vec<Major>,
        teachers: HashMap<TeacherId, Teacher>,
        classrooms: HashMap<ClassroomId, Classroom>,
        courses: HashMap<CourseId, Course>,
        timeslots: HashMap<TimeSlotId, TimeSlot>,
        assignments_by_major: HashMap<MajorId, Vec<CourseAssignment>>,
        approved_avoid: ApprovedAvoidSet,
    ) -> Self {
        let timeslot_lookup = timeslots
            .values()
            .map(|slot| ((slot.day, slot.period), slot.id))
            .collect();
        Self {
            semester,
            majors,
            teachers,
            classrooms,
            courses,
            timeslots,
            assignments_by_major,
            approved_avoid,
            timeslot_lookup,
        }
    }

    /// Time slots that exist in the catalog, sorted by (day-index, period) — the canonical
    /// weekly enumeration order used by both the template generator and the main loop.
    pub fn sorted_timeslots(&self) -> Vec<&TimeSlot> {
        let mut slots: Vec<&TimeSlot> = self.timeslots.values().collect();
        slots.sort_by_key(|s| s.sort_key());
        slots
    }

    pub fn timeslot_id_for(&self, day: DayOfWeek, period: u32) -> Option<TimeSlotId> {
        self.timeslot_lookup.get(&(day, period)).copied()
    }

    /// Majors in lexicographic name order, matching the ordering guarantee the main loop relies
    /// on for deterministic, auditable scheduling order.
    pub fn majors_in_order(&self) -> Vec<&Major> {
        let mut majors: Vec<&Major> = self.majors.iter().collect();
        majors.sort_by(|a, b| a.name.cmp(&b.name));
        majors
    }
}
