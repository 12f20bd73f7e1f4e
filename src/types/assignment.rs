use super::{CourseId, MajorId, SemesterId, TeacherId};

/// A course-assignment record: one major's need to have one teacher teach one course for a
/// fixed number of sessions during a semester.
#[derive(Debug, Clone)]
pub struct CourseAssignment {
    pub id: super::AssignmentId,
    pub semester_id: SemesterId,
    pub major_id: MajorId,
    pub course_id: CourseId,
    pub teacher_id: TeacherId,
    pub is_core: bool,
    pub expected_students: u32,
}
