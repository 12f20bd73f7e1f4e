use super::{
    AssignmentId, ClassroomId, CourseId, MajorId, SemesterId, TeacherId, TimeSlotId,
};

/// One successful placement of an assignment into a (week, timeslot, classroom) triple.
///
/// Mirrors the `timetable_entries` row layout; has no meaningful id until persisted, so the
/// scheduler builds these without one and the persistence layer assigns one on insert.
#[derive(Debug, Clone)]
pub struct TimetableEntry {
    pub semester_id: SemesterId,
    pub major_id: MajorId,
    pub course_id: CourseId,
    pub teacher_id: TeacherId,
    pub classroom_id: ClassroomId,
    pub timeslot_id: TimeSlotId,
    pub week_number: u32,
    pub assignment_id: AssignmentId,
}
