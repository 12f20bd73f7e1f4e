use serde::Serialize;

/// Outcome classification for a run, serialized exactly as named in the stable summary JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    SuccessNoTasks,
    Error,
    Failure,
}

/// Structured result returned from an orchestrator run, with stable field names suitable for
/// serializing straight to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub status: RunStatus,
    pub message: String,
    pub processed_majors: u32,
    pub total_scheduled_entries: u32,
    pub total_conflicts: u32,
    pub total_uncompleted_tasks: u32,
    pub db_records_cleared: u32,
    pub db_records_saved: u32,
    pub details: Vec<String>,
}

impl RunSummary {
    pub fn invalid_semester(message: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Failure,
            message: message.into(),
            processed_majors: 0,
            total_scheduled_entries: 0,
            total_conflicts: 0,
            total_uncompleted_tasks: 0,
            db_records_cleared: 0,
            db_records_saved: 0,
            details: Vec::new(),
        }
    }

    pub fn no_work(message: impl Into<String>) -> Self {
        Self {
            status: RunStatus::SuccessNoTasks,
            message: message.into(),
            processed_majors: 0,
            total_scheduled_entries: 0,
            total_conflicts: 0,
            total_uncompleted_tasks: 0,
            db_records_cleared: 0,
            db_records_saved: 0,
            details: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Error,
            message: message.into(),
            processed_majors: 0,
            total_scheduled_entries: 0,
            total_conflicts: 0,
            total_uncompleted_tasks: 0,
            db_records_cleared: 0,
            db_records_saved: 0,
            details: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_stable_names() {
        assert_eq!(serde_json::to_string(&RunStatus::Success).unwrap(), "\"success\"");
        assert_eq!(
            serde_json::to_string(&RunStatus::SuccessNoTasks).unwrap(),
            "\"success_no_tasks\""
        );
        assert_eq!(serde_json::to_string(&RunStatus::Error).unwrap(), "\"error\"");
        assert_eq!(serde_json::to_string(&RunStatus::Failure).unwrap(), "\"failure\"");
    }
}
