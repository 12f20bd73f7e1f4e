use super::TimeSlotId;
use chrono::NaiveTime;

/// Day of the week, ordered Monday-first to match the template generator's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// 1-based ordinal matching the `day_index` column used by the time-slot catalog.
    pub fn day_index(self) -> u8 {
        match self {
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
            DayOfWeek::Sunday => 7,
        }
    }

    pub fn from_day_index(value: u8) -> Option<Self> {
        Some(match value {
            1 => DayOfWeek::Monday,
            2 => DayOfWeek::Tuesday,
            3 => DayOfWeek::Wednesday,
            4 => DayOfWeek::Thursday,
            5 => DayOfWeek::Friday,
            6 => DayOfWeek::Saturday,
            7 => DayOfWeek::Sunday,
            _ => return None,
        })
    }
}

/// A single teaching period on a given day, e.g. "Monday period 3".
#[derive(Debug, Clone)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub day: DayOfWeek,
    pub period: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// Ordering key used to lay slots out left-to-right, top-to-bottom in the template grid.
    pub fn sort_key(&self) -> (u8, u32) {
        (self.day.day_index(), self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_index_round_trips() {
        for day in [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ] {
            assert_eq!(DayOfWeek::from_day_index(day.day_index()), Some(day));
        }
    }

    #[test]
    fn unknown_index_is_none() {
        assert_eq!(DayOfWeek::from_day_index(0), None);
        assert_eq!(DayOfWeek::from_day_index(8), None);
    }
}
