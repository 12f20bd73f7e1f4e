//! Raw row shapes as they come back from the database, plus conversions into the domain types
//! in `crate::types`. Kept separate from the query functions so the mapping logic is testable
//! without a live connection.

use crate::types::{
    AssignmentId, Classroom, ClassroomId, Course, CourseAssignment, CourseId, CourseType,
    DayOfWeek, Major, MajorId, RoomType, Semester, SemesterId, Teacher, TeacherAvoidPref,
    TeacherId, TimeSlot, TimeSlotId,
};
use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct SemesterRow {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SemesterRow {
    pub fn into_semester(self) -> Semester {
        Semester::new(SemesterId(self.id), self.name, self.start_date, self.end_date)
    }
}

#[derive(Debug, FromRow)]
pub struct MajorRow {
    pub id: i32,
    pub name: String,
}

impl MajorRow {
    pub fn into_major(self) -> Major {
        Major {
            id: MajorId(self.id),
            name: self.name,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct TeacherRow {
    pub id: i32,
    pub user_id: i32,
    pub username: Option<String>,
}

impl TeacherRow {
    pub fn into_teacher(self) -> Teacher {
        Teacher {
            id: TeacherId(self.id),
            user_id: self.user_id,
            display_name: Teacher::resolve_display_name(self.username.as_deref()),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ClassroomRow {
    pub id: i32,
    pub building: Option<String>,
    pub room_number: Option<String>,
    pub capacity: i32,
    pub room_type: String,
}

impl ClassroomRow {
    pub fn into_classroom(self) -> Classroom {
        Classroom {
            id: ClassroomId(self.id),
            display_name: Classroom::display_name(self.building.as_deref(), self.room_number.as_deref()),
            capacity: self.capacity.max(0) as u32,
            room_type: RoomType::from_db_str(&self.room_type),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CourseRow {
    pub id: i32,
    pub name: String,
    pub total_sessions: i32,
    pub course_type: String,
}

impl CourseRow {
    pub fn into_course(self) -> Course {
        Course {
            id: CourseId(self.id),
            name: self.name,
            total_sessions: self.total_sessions.max(0) as u32,
            course_type: CourseType::from_db_str(&self.course_type),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct TimeSlotRow {
    pub id: i32,
    pub day_index: i32,
    pub period: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlotRow {
    /// Returns `None` for a row whose `day_index` doesn't map to a known day, logging it as
    /// skipped rather than failing the whole load.
    pub fn into_timeslot(self) -> Option<TimeSlot> {
        let day = DayOfWeek::from_day_index(self.day_index as u8);
        match day {
            Some(day) => Some(TimeSlot {
                id: TimeSlotId(self.id),
                day,
                period: self.period.max(0) as u32,
                start_time: self.start_time,
                end_time: self.end_time,
            }),
            None => {
                tracing::warn!(timeslot_id = self.id, day_index = self.day_index, "skipping time slot with unknown day_index");
                None
            }
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CourseAssignmentRow {
    pub id: i32,
    pub semester_id: i32,
    pub major_id: i32,
    pub course_id: i32,
    pub teacher_id: i32,
    pub is_core: bool,
    pub expected_students: i32,
}

impl CourseAssignmentRow {
    pub fn into_assignment(self) -> CourseAssignment {
        CourseAssignment {
            id: AssignmentId(self.id),
            semester_id: SemesterId(self.semester_id),
            major_id: MajorId(self.major_id),
            course_id: CourseId(self.course_id),
            teacher_id: TeacherId(self.teacher_id),
            is_core: self.is_core,
            expected_students: self.expected_students.max(0) as u32,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct TeacherAvoidPrefRow {
    pub teacher_id: i32,
    pub semester_id: i32,
    pub timeslot_id: i32,
}

impl TeacherAvoidPrefRow {
    pub fn into_pref(self) -> TeacherAvoidPref {
        TeacherAvoidPref {
            teacher_id: TeacherId(self.teacher_id),
            semester_id: SemesterId(self.semester_id),
            timeslot_id: TimeSlotId(self.timeslot_id),
        }
    }
}
