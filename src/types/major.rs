use super::MajorId;

/// An academic major; its name is what majors are sorted by for scheduling order.
#[derive(Debug, Clone)]
pub struct Major {
    pub id: MajorId,
    pub name: String,
}
