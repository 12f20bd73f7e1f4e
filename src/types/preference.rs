use super::{SemesterId, TeacherId, TimeSlotId};
use std::collections::HashSet;

/// A single approved "avoid" teacher-scheduling-preference row.
#[derive(Debug, Clone)]
pub struct TeacherAvoidPref {
    pub teacher_id: TeacherId,
    pub semester_id: SemesterId,
    pub timeslot_id: TimeSlotId,
}

/// Membership set of approved avoid-preferences, keyed by (teacher, timeslot, semester) for
/// O(1) lookup from the constraint oracle.
#[derive(Debug, Clone, Default)]
pub struct ApprovedAvoidSet(HashSet<(TeacherId, TimeSlotId, SemesterId)>);

impl ApprovedAvoidSet {
    pub fn from_rows(rows: impl IntoIterator<Item = TeacherAvoidPref>) -> Self {
        Self(
            rows.into_iter()
                .map(|p| (p.teacher_id, p.timeslot_id, p.semester_id))
                .collect(),
        )
    }

    pub fn contains(&self, teacher_id: TeacherId, timeslot_id: TimeSlotId, semester_id: SemesterId) -> bool {
        self.0.contains(&(teacher_id, timeslot_id, semester_id))
    }
}
