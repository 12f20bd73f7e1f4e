//! Property-based checks of the invariants that must hold over every entry set the engine
//! produces, run against randomly generated small catalogs rather than fixed fixtures.

use crate::scheduler::{engine, template};
use crate::types::{
    ApprovedAvoidSet, AssignmentId, Catalog, Classroom, ClassroomId, Course, CourseAssignment,
    CourseId, CourseType, DayOfWeek, Major, MajorId, Occupancy, RoomType, Semester, SemesterId,
    Teacher, TeacherId, TimeSlot, TimeSlotId,
};
use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
struct GeneratedAssignment {
    major_index: usize,
    teacher_index: usize,
    total_sessions: u32,
    expected_students: u32,
    is_core: bool,
}

fn assignment_strategy() -> impl Strategy<Value = GeneratedAssignment> {
    (0usize..2, 0usize..2, 1u32..4, 5u32..30, any::<bool>()).prop_map(
        |(major_index, teacher_index, total_sessions, expected_students, is_core)| {
            GeneratedAssignment {
                major_index,
                teacher_index,
                total_sessions,
                expected_students,
                is_core,
            }
        },
    )
}

fn build_catalog(
    num_rooms: usize,
    room_capacity: u32,
    num_timeslots: u32,
    total_weeks: u32,
    assignments: &[GeneratedAssignment],
) -> Catalog {
    let semester = Semester::new(
        SemesterId(1),
        "S".into(),
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap() + Duration::days((total_weeks * 7) as i64 - 1),
    );

    let mut classrooms = HashMap::new();
    for i in 0..num_rooms {
        classrooms.insert(
            ClassroomId(i as i32 + 1),
            Classroom {
                id: ClassroomId(i as i32 + 1),
                display_name: format!("room-{i}"),
                capacity: room_capacity,
                room_type: RoomType::Ordinary,
            },
        );
    }

    let mut timeslots = HashMap::new();
    for p in 1..=num_timeslots {
        timeslots.insert(
            TimeSlotId(p as i32),
            TimeSlot {
                id: TimeSlotId(p as i32),
                day: DayOfWeek::Monday,
                period: p,
                start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(8, 45, 0).unwrap(),
            },
        );
    }

    let mut teachers = HashMap::new();
    for i in 0..2 {
        teachers.insert(
            TeacherId(i + 1),
            Teacher {
                id: TeacherId(i + 1),
                user_id: i,
                display_name: format!("teacher-{i}"),
            },
        );
    }

    let mut courses = HashMap::new();
    let mut assignments_by_major: HashMap<MajorId, Vec<CourseAssignment>> = HashMap::new();
    let majors: Vec<Major> = (0..2)
        .map(|i| Major {
            id: MajorId(i + 1),
            name: format!("major-{i}"),
        })
        .collect();

    for (idx, gen) in assignments.iter().enumerate() {
        let course_id = CourseId(idx as i32 + 1);
        courses.insert(
            course_id,
            Course {
                id: course_id,
                name: format!("course-{idx}"),
                total_sessions: gen.total_sessions,
                course_type: CourseType::Theory,
            },
        );
        let major_id = MajorId(gen.major_index as i32 + 1);
        assignments_by_major.entry(major_id).or_default().push(CourseAssignment {
            id: AssignmentId(idx as i32 + 1),
            semester_id: SemesterId(1),
            major_id,
            course_id,
            teacher_id: TeacherId(gen.teacher_index as i32 + 1),
            is_core: gen.is_core,
            expected_students: gen.expected_students,
        });
    }

    Catalog::new(
        semester,
        majors,
        teachers,
        classrooms,
        courses,
        timeslots,
        assignments_by_major,
        ApprovedAvoidSet::from_rows(vec![]),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_over_randomly_generated_runs(
        num_rooms in 1usize..3,
        room_capacity in 10u32..40,
        num_timeslots in 1u32..3,
        total_weeks in 1u32..3,
        assignments in proptest::collection::vec(assignment_strategy(), 1..4),
        seed in any::<u64>(),
    ) {
        let catalog = build_catalog(num_rooms, room_capacity, num_timeslots, total_weeks, &assignments);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut occupancy = Occupancy::new();

        let mut all_entries = Vec::new();
        let mut remaining_by_assignment: HashMap<AssignmentId, u32> = HashMap::new();

        for major in catalog.majors_in_order() {
            let plan = template::build_plan(&catalog, major.id, &mut rng);
            let result = engine::schedule_major(&catalog, &mut occupancy, major.id, plan, &mut rng);
            all_entries.extend(result.entries);
            for u in result.uncompleted {
                remaining_by_assignment.insert(u.assignment_id, u.remaining);
            }
        }

        let mut teacher_slots = HashSet::new();
        let mut room_slots = HashSet::new();
        let mut major_slots = HashSet::new();
        let mut placed_by_assignment: HashMap<AssignmentId, u32> = HashMap::new();

        for entry in &all_entries {
            prop_assert!(teacher_slots.insert((entry.teacher_id, entry.week_number, entry.timeslot_id)));
            prop_assert!(room_slots.insert((entry.classroom_id, entry.week_number, entry.timeslot_id)));
            prop_assert!(major_slots.insert((entry.major_id, entry.week_number, entry.timeslot_id)));
            *placed_by_assignment.entry(entry.assignment_id).or_insert(0) += 1;
        }

        for assignments_for_major in catalog.assignments_by_major.values() {
            for assignment in assignments_for_major {
                let total = catalog.courses.get(&assignment.course_id).unwrap().total_sessions;
                let placed = placed_by_assignment.get(&assignment.id).copied().unwrap_or(0);
                let remaining = remaining_by_assignment.get(&assignment.id).copied().unwrap_or(0);
                prop_assert_eq!(placed + remaining, total);
            }
        }
    }
}
