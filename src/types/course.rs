use super::CourseId;

/// Course category, used to decide a course's preferred classroom type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseType {
    Theory,
    Lab,
    Other,
}

impl CourseType {
    pub fn from_db_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "lab" => CourseType::Lab,
            "theory" => CourseType::Theory,
            _ => CourseType::Other,
        }
    }

    /// Whether this course prefers a lab classroom (used by the constraint oracle's room
    /// preference partition).
    pub fn prefers_lab(self) -> bool {
        matches!(self, CourseType::Lab)
    }
}

#[derive(Debug, Clone)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub total_sessions: u32,
    pub course_type: CourseType,
}
