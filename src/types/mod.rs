mod assignment;
mod catalog;
mod classroom;
mod course;
mod entry;
mod ids;
mod major;
mod occupancy;
mod preference;
mod semester;
mod summary;
mod teacher;
mod timeslot;

pub use assignment::CourseAssignment;
pub use catalog::Catalog;
pub use classroom::{Classroom, RoomType, UNKNOWN_BUILDING, UNKNOWN_ROOM_NUMBER};
pub use course::{Course, CourseType};
pub use entry::TimetableEntry;
pub use ids::{AssignmentId, ClassroomId, CourseId, MajorId, SemesterId, TeacherId, TimeSlotId};
pub use major::Major;
pub use occupancy::Occupancy;
pub use preference::{ApprovedAvoidSet, TeacherAvoidPref};
pub use semester::Semester;
pub use summary::{RunStatus, RunSummary};
pub use teacher::{Teacher, UNKNOWN_TEACHER_NAME};
pub use timeslot::{DayOfWeek, TimeSlot};
