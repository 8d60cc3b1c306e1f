use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// User record returned by login/sign-up and persisted as the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub jwt: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn has_token(&self) -> bool {
        !self.jwt.trim().is_empty()
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "User"
        } else {
            self.name.trim()
        }
    }

    pub fn first_name(&self) -> &str {
        self.display_name()
            .split_whitespace()
            .next()
            .unwrap_or("User")
    }

    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    pub leave_type: String,
    pub remaining_days: u32,
    pub max_days: u32,
}

impl LeaveBalance {
    pub fn used_days(&self) -> u32 {
        self.max_days.saturating_sub(self.remaining_days)
    }

    /// Share of the allowance still available, clamped to 0..=100.
    pub fn remaining_percent(&self) -> f64 {
        if self.max_days == 0 {
            return 0.0;
        }
        (f64::from(self.remaining_days) / f64::from(self.max_days) * 100.0).clamp(0.0, 100.0)
    }

    pub fn remaining_label(&self) -> String {
        match self.remaining_days {
            0 => "No leaves".to_string(),
            1 => "1 day left".to_string(),
            n => format!("{} days left", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeaveRequest {
    pub leave_type: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveStatus {
    #[serde(alias = "approved")]
    Approved,
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "rejected")]
    Rejected,
    #[serde(alias = "cancelled")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    pub const FILTERABLE: [LeaveStatus; 4] = [
        LeaveStatus::Approved,
        LeaveStatus::Pending,
        LeaveStatus::Rejected,
        LeaveStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
            LeaveStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestRecord {
    pub id: String,
    pub leave_type: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub no_days: u32,
    pub status: LeaveStatus,
    #[serde(default, alias = "appliedOn")]
    pub applied_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequest {
    pub id: String,
    pub employee_name: String,
    pub employee_id: String,
    pub leave_type: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub no_days: u32,
    #[serde(default)]
    pub applied_on: String,
}

pub fn days_label(count: u32) -> String {
    if count == 1 {
        "1 Day".to_string()
    } else {
        format!("{} Days", count)
    }
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "NOT_FOUND")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    /// Used when the backend answers with an error status but no
    /// `{error, code}` body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match body.trim() {
            "" => format!("Request failed with status {}", status),
            text => text.to_string(),
        };
        match status {
            400 | 422 => Self::validation(message),
            401 | 403 => Self::unauthorized(message),
            404 => Self::not_found(message),
            _ => Self::with_code(message, &format!("HTTP_{}", status)),
        }
    }
}
