/// Visual treatment of a leave category. Unknown categories share one
/// fallback style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveKind {
    Sick,
    Casual,
    Earned,
    Other,
}

impl LeaveKind {
    pub fn from_type(leave_type: &str) -> Self {
        match leave_type.trim().to_ascii_uppercase().as_str() {
            "SICK" => LeaveKind::Sick,
            "CASUAL" => LeaveKind::Casual,
            "EARNED" => LeaveKind::Earned,
            _ => LeaveKind::Other,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LeaveKind::Sick => "🏥",
            LeaveKind::Casual => "🎉",
            LeaveKind::Earned => "⭐",
            LeaveKind::Other => "📅",
        }
    }

    pub fn stroke_color(self) -> &'static str {
        match self {
            LeaveKind::Sick => "#ef4444",
            LeaveKind::Casual => "#3b82f6",
            LeaveKind::Earned => "#10b981",
            LeaveKind::Other => "#f97316",
        }
    }

    pub fn track_color(self) -> &'static str {
        match self {
            LeaveKind::Sick => "#fee2e2",
            LeaveKind::Casual => "#dbeafe",
            LeaveKind::Earned => "#d1fae5",
            LeaveKind::Other => "#fed7aa",
        }
    }

    pub fn border_class(self) -> &'static str {
        match self {
            LeaveKind::Sick => "border-red-200",
            LeaveKind::Casual => "border-blue-200",
            LeaveKind::Earned => "border-green-200",
            LeaveKind::Other => "border-orange-200",
        }
    }
}
