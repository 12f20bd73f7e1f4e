//! Per-major template generation: an advisory (day, period) -> assignment map that biases the
//! engine toward a stable weekly rhythm, plus the replacement pool of leftover assignments.

use crate::types::{Catalog, CourseAssignment, MajorId, TimeSlotId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// One assignment's live remaining-session counter, tracked separately from the catalog's
/// immutable `CourseAssignment` so the same assignment can be looked up from both the template
/// and the pool without cloning the counter in two places.
#[derive(Debug, Clone)]
pub struct Pending {
    pub assignment: CourseAssignment,
    pub remaining: u32,
}

/// A major's initial template plus its dynamic replacement pool.
#[derive(Debug, Default)]
pub struct MajorPlan {
    pub template: HashMap<TimeSlotId, Pending>,
    pub pool: Vec<Pending>,
}

/// Builds the initial template and replacement pool for one major.
///
/// Priority order is (is-core descending, total-sessions descending, random tiebreak).
/// Assignments with zero total sessions are excluded up front.
pub fn build_plan(catalog: &Catalog, major_id: MajorId, rng: &mut impl Rng) -> MajorPlan {
    let mut candidates: Vec<Pending> = catalog
        .assignments_by_major
        .get(&major_id)
        .into_iter()
        .flatten()
        .filter(|a| a.expected_sessions(catalog) > 0)
        .map(|a| Pending {
            assignment: a.clone(),
            remaining: a.expected_sessions(catalog),
        })
        .collect();

    candidates.shuffle(rng);
    candidates.sort_by(|a, b| {
        b.assignment
            .is_core
            .cmp(&a.assignment.is_core)
            .then(b.remaining.cmp(&a.remaining))
    });

    let slots = catalog.sorted_timeslots();
    let mut template = HashMap::new();
    let mut iter = candidates.into_iter();
    for slot in &slots {
        match iter.next() {
            Some(pending) => {
                template.insert(slot.id, pending);
            }
            None => break,
        }
    }
    let pool: Vec<Pending> = iter.collect();

    MajorPlan { template, pool }
}

trait SessionLookup {
    fn expected_sessions(&self, catalog: &Catalog) -> u32;
}

impl SessionLookup for CourseAssignment {
    fn expected_sessions(&self, catalog: &Catalog) -> u32 {
        catalog
            .courses
            .get(&self.course_id)
            .map(|c| c.total_sessions)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ApprovedAvoidSet, AssignmentId, Catalog, Course, CourseId, CourseType, DayOfWeek, Major,
        Semester, SemesterId, TeacherId, TimeSlot, TimeSlotId,
    };
    use chrono::{NaiveDate, NaiveTime};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn catalog_with_two_assignments() -> Catalog {
        let semester = Semester::new(
            SemesterId(1),
            "S".into(),
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
        );
        let mut courses = HashMap::new();
        courses.insert(
            CourseId(1),
            Course {
                id: CourseId(1),
                name: "A".into(),
                total_sessions: 2,
                course_type: CourseType::Theory,
            },
        );
        courses.insert(
            CourseId(2),
            Course {
                id: CourseId(2),
                name: "B".into(),
                total_sessions: 1,
                course_type: CourseType::Theory,
            },
        );
        let mut timeslots = HashMap::new();
        timeslots.insert(
            TimeSlotId(1),
            TimeSlot {
                id: TimeSlotId(1),
                day: DayOfWeek::Monday,
                period: 1,
                start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(8, 45, 0).unwrap(),
            },
        );
        let mut assignments = HashMap::new();
        assignments.insert(
            MajorId(1),
            vec![
                CourseAssignment {
                    id: AssignmentId(1),
                    semester_id: SemesterId(1),
                    major_id: MajorId(1),
                    course_id: CourseId(1),
                    teacher_id: TeacherId(1),
                    is_core: true,
                    expected_students: 10,
                },
                CourseAssignment {
                    id: AssignmentId(2),
                    semester_id: SemesterId(1),
                    major_id: MajorId(1),
                    course_id: CourseId(2),
                    teacher_id: TeacherId(2),
                    is_core: false,
                    expected_students: 10,
                },
            ],
        );
        Catalog::new(
            semester,
            vec![Major {
                id: MajorId(1),
                name: "CS".into(),
            }],
            HashMap::new(),
            HashMap::new(),
            courses,
            timeslots,
            assignments,
            ApprovedAvoidSet::from_rows(vec![]),
        )
    }

    #[test]
    fn single_slot_goes_to_template_rest_to_pool() {
        let catalog = catalog_with_two_assignments();
        let mut rng = StdRng::seed_from_u64(7);
        let plan = build_plan(&catalog, MajorId(1), &mut rng);
        assert_eq!(plan.template.len(), 1);
        assert_eq!(plan.pool.len(), 1);
    }

    #[test]
    fn core_assignment_wins_the_only_template_slot() {
        let catalog = catalog_with_two_assignments();
        let mut rng = StdRng::seed_from_u64(7);
        let plan = build_plan(&catalog, MajorId(1), &mut rng);
        let templated = plan.template.values().next().unwrap();
        assert!(templated.assignment.is_core);
    }

    #[test]
    fn zero_session_assignments_are_excluded() {
        let mut catalog = catalog_with_two_assignments();
        catalog
            .courses
            .get_mut(&CourseId(2))
            .unwrap()
            .total_sessions = 0;
        let mut rng = StdRng::seed_from_u64(7);
        let plan = build_plan(&catalog, MajorId(1), &mut rng);
        assert_eq!(plan.template.len() + plan.pool.len(), 1);
    }
}
