mod rows;

use crate::error::{Result, SchedulerError};
use crate::types::{
    ApprovedAvoidSet, Catalog, Classroom, Course, CourseAssignment, Major, Teacher, TimeSlot,
};
use rows::{
    ClassroomRow, CourseAssignmentRow, CourseRow, MajorRow, SemesterRow, TeacherAvoidPrefRow,
    TeacherRow, TimeSlotRow,
};
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::instrument;

/// Reads every catalog entity needed for one semester's run into memory.
///
/// All catalog entities are read-only for the remainder of the run; only the occupancy state
/// and per-major replacement pools mutate while scheduling proceeds.
#[instrument(skip(pool), fields(semester_id = semester_id.0))]
pub async fn load_catalog(pool: &PgPool, semester_id: crate::types::SemesterId) -> Result<Catalog> {
    let semester_row = sqlx::query_as::<_, SemesterRow>(
        "SELECT id, name, start_date, end_date FROM semesters WHERE id = $1",
    )
    .bind(semester_id.0)
    .fetch_optional(pool)
    .await?;

    let semester = match semester_row {
        Some(row) => row.into_semester(),
        None => {
            return Err(SchedulerError::InvalidSemester {
                semester_id: semester_id.0,
                reason: "not found".into(),
            })
        }
    };

    let major_rows = sqlx::query_as::<_, MajorRow>("SELECT id, name FROM majors")
        .fetch_all(pool)
        .await?;
    let majors: Vec<Major> = major_rows.into_iter().map(MajorRow::into_major).collect();

    let teacher_rows = sqlx::query_as::<_, TeacherRow>(
        r#"
        SELECT t.id, t.user_id, u.username
        FROM teachers t
        LEFT JOIN users u ON u.id = t.user_id
        "#,
    )
    .fetch_all(pool)
    .await?;
    let teachers: HashMap<_, Teacher> = teacher_rows
        .into_iter()
        .map(TeacherRow::into_teacher)
        .map(|t| (t.id, t))
        .collect();

    let classroom_rows = sqlx::query_as::<_, ClassroomRow>(
        "SELECT id, building, room_number, capacity, room_type FROM classrooms",
    )
    .fetch_all(pool)
    .await?;
    let classrooms: HashMap<_, Classroom> = classroom_rows
        .into_iter()
        .map(ClassroomRow::into_classroom)
        .map(|c| (c.id, c))
        .collect();

    let course_rows = sqlx::query_as::<_, CourseRow>(
        "SELECT id, name, total_sessions, course_type FROM courses",
    )
    .fetch_all(pool)
    .await?;
    let courses: HashMap<_, Course> = course_rows
        .into_iter()
        .map(CourseRow::into_course)
        .map(|c| (c.id, c))
        .collect();

    let timeslot_rows = sqlx::query_as::<_, TimeSlotRow>(
        "SELECT id, day_index, period, start_time, end_time FROM time_slots",
    )
    .fetch_all(pool)
    .await?;
    let timeslots: HashMap<_, TimeSlot> = timeslot_rows
        .into_iter()
        .filter_map(TimeSlotRow::into_timeslot)
        .map(|s| (s.id, s))
        .collect();

    let assignment_rows = sqlx::query_as::<_, CourseAssignmentRow>(
        r#"
        SELECT id, semester_id, major_id, course_id, teacher_id, is_core, expected_students
        FROM course_assignments
        WHERE semester_id = $1
        "#,
    )
    .bind(semester_id.0)
    .fetch_all(pool)
    .await?;
    let mut assignments_by_major: HashMap<_, Vec<CourseAssignment>> = HashMap::new();
    for row in assignment_rows {
        let assignment = row.into_assignment();
        assignments_by_major
            .entry(assignment.major_id)
            .or_default()
            .push(assignment);
    }

    let avoid_rows = sqlx::query_as::<_, TeacherAvoidPrefRow>(
        r#"
        SELECT teacher_id, semester_id, timeslot_id
        FROM teacher_scheduling_preferences
        WHERE semester_id = $1 AND preference_type = 'avoid' AND status = 'approved'
        "#,
    )
    .bind(semester_id.0)
    .fetch_all(pool)
    .await?;
    let approved_avoid =
        ApprovedAvoidSet::from_rows(avoid_rows.into_iter().map(TeacherAvoidPrefRow::into_pref));

    tracing::info!(
        majors = majors.len(),
        teachers = teachers.len(),
        classrooms = classrooms.len(),
        timeslots = timeslots.len(),
        "catalog loaded"
    );

    Ok(Catalog::new(
        semester,
        majors,
        teachers,
        classrooms,
        courses,
        timeslots,
        assignments_by_major,
        approved_avoid,
    ))
}
