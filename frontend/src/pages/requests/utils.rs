use crate::api::{LeaveRequestRecord, LeaveStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeaveStatus),
}

impl StatusFilter {
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(LeaveStatus::FILTERABLE.into_iter().map(StatusFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(self, record: &LeaveRequestRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.status == status,
        }
    }
}

pub fn filter_records(records: &[LeaveRequestRecord], filter: StatusFilter) -> Vec<LeaveRequestRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

pub fn count_matching(records: &[LeaveRequestRecord], filter: StatusFilter) -> usize {
    records.iter().filter(|record| filter.matches(record)).count()
}

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
        LeaveStatus::Cancelled | LeaveStatus::Unknown => "bg-surface-muted text-fg-muted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, status: LeaveStatus) -> LeaveRequestRecord {
        LeaveRequestRecord {
            id: id.into(),
            leave_type: "SICK".into(),
            start: "2026-02-10".into(),
            end: "2026-02-10".into(),
            no_days: 1,
            status,
            applied_date: None,
        }
    }

    #[test]
    fn options_list_all_then_each_status() {
        let options = StatusFilter::options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], StatusFilter::All);
        assert_eq!(options[4].label(), "Cancelled");
    }

    #[test]
    fn filter_and_count_follow_status() {
        let records = vec![
            record("a", LeaveStatus::Approved),
            record("b", LeaveStatus::Pending),
            record("c", LeaveStatus::Approved),
        ];
        assert_eq!(count_matching(&records, StatusFilter::All), 3);
        assert_eq!(count_matching(&records, StatusFilter::Only(LeaveStatus::Approved)), 2);
        assert_eq!(count_matching(&records, StatusFilter::Only(LeaveStatus::Rejected)), 0);

        let pending = filter_records(&records, StatusFilter::Only(LeaveStatus::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "b");
    }

    #[test]
    fn badge_classes_distinguish_outcomes() {
        assert!(status_badge_class(LeaveStatus::Approved).contains("success"));
        assert!(status_badge_class(LeaveStatus::Rejected).contains("error"));
        assert_eq!(
            status_badge_class(LeaveStatus::Cancelled),
            status_badge_class(LeaveStatus::Unknown)
        );
    }
}
