use super::ClassroomId;

pub const UNKNOWN_BUILDING: &str = "未知楼";
pub const UNKNOWN_ROOM_NUMBER: &str = "未知号";

/// Physical room category, used to steer `findRoom`'s preference partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Ordinary,
    Lab,
}

impl RoomType {
    pub fn from_db_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "lab" => RoomType::Lab,
            _ => RoomType::Ordinary,
        }
    }

    pub fn as_db_str(self) -> &'static str {
        match self {
            RoomType::Ordinary => "ordinary",
            RoomType::Lab => "lab",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Classroom {
    pub id: ClassroomId,
    pub display_name: String,
    pub capacity: u32,
    pub room_type: RoomType,
}

impl Classroom {
    /// Build a classroom's display name as `"{building}-{room}"`, substituting documented
    /// fallback tokens for missing building or room-number components.
    pub fn display_name(building: Option<&str>, room_number: Option<&str>) -> String {
        let building = building
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_BUILDING);
        let room_number = room_number
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_ROOM_NUMBER);
        format!("{building}-{room_number}")
    }

    pub fn fits(&self, expected_students: u32) -> bool {
        self.capacity >= expected_students
    }
}
