use super::TeacherId;

/// Placeholder used when a teacher's backing user record cannot be resolved.
pub const UNKNOWN_TEACHER_NAME: &str = "未知用户";

/// A teacher, identified separately from the `users` row it is resolved from.
#[derive(Debug, Clone)]
pub struct Teacher {
    pub id: TeacherId,
    pub user_id: i32,
    pub display_name: String,
}

impl Teacher {
    /// Build a teacher's display name from a joined username, falling back to a placeholder
    /// rather than failing the load when the user record is missing.
    pub fn resolve_display_name(username: Option<&str>) -> String {
        username
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_TEACHER_NAME)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_username_when_present() {
        assert_eq!(Teacher::resolve_display_name(Some("张三")), "张三");
    }

    #[test]
    fn falls_back_on_missing_username() {
        assert_eq!(Teacher::resolve_display_name(None), UNKNOWN_TEACHER_NAME);
    }

    #[test]
    fn falls_back_on_blank_username() {
        assert_eq!(Teacher::resolve_display_name(Some("   ")), UNKNOWN_TEACHER_NAME);
    }
}
