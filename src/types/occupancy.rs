use super::{ClassroomId, MajorId, TeacherId, TimeSlotId};
use std::collections::HashSet;

/// Run-scoped occupancy state shared across every major being scheduled.
///
/// Created empty at run start, mutated monotonically as assignments succeed, and discarded at
/// run end — the only durable form of a schedule is the resulting entry rows. Must be created
/// once per run and threaded through every major's scheduling pass; recreating it per-major
/// would silently allow cross-major double-booking.
#[derive(Debug, Default)]
pub struct Occupancy {
    busy_teachers: HashSet<(TeacherId, u32, TimeSlotId)>,
    busy_rooms: HashSet<(ClassroomId, u32, TimeSlotId)>,
    busy_majors: HashSet<(MajorId, u32, TimeSlotId)>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teacher_busy(&self, teacher_id: TeacherId, week: u32, timeslot_id: TimeSlotId) -> bool {
        self.busy_teachers.contains(&(teacher_id, week, timeslot_id))
    }

    pub fn room_busy(&self, classroom_id: ClassroomId, week: u32, timeslot_id: TimeSlotId) -> bool {
        self.busy_rooms.contains(&(classroom_id, week, timeslot_id))
    }

    pub fn major_busy(&self, major_id: MajorId, week: u32, timeslot_id: TimeSlotId) -> bool {
        self.busy_majors.contains(&(major_id, week, timeslot_id))
    }

    /// Record a successful placement across all three sets. Must only be called after `check`
    /// has confirmed none of the three triples is already occupied.
    pub fn occupy(
        &mut self,
        teacher_id: TeacherId,
        classroom_id: ClassroomId,
        major_id: MajorId,
        week: u32,
        timeslot_id: TimeSlotId,
    ) {
        self.busy_teachers.insert((teacher_id, week, timeslot_id));
        self.busy_rooms.insert((classroom_id, week, timeslot_id));
        self.busy_majors.insert((major_id, week, timeslot_id));
    }
}
