use crate::api::ApplyLeaveRequest;

pub const SUCCESS_RETURN_MS: u32 = 5_000;
pub const FAILURE_RELOAD_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Rejected,
}

impl ApplyOutcome {
    pub fn title(self) -> &'static str {
        match self {
            ApplyOutcome::Applied => "Leave Applied Successfully",
            ApplyOutcome::Rejected => "Leave Request Unsuccessful",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApplyOutcome::Applied => "Check Inbox to track request",
            ApplyOutcome::Rejected => "Not enough remaining days",
        }
    }
}

pub fn normalize_leave_type(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn page_subtitle(leave_type: Option<&str>) -> String {
    match leave_type {
        Some(kind) => format!("Select dates for your {} request", kind),
        None => "Select the dates for your leave request".to_string(),
    }
}

pub fn build_request(
    leave_type: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> ApplyLeaveRequest {
    ApplyLeaveRequest {
        leave_type,
        start,
        end,
    }
}
