//! Data-subject request lifecycle derivations.
//!
//! Status transitions are driven externally (by the API); this module only
//! derives facts from stored records: statutory due dates, days-until-due,
//! the overdue flag, and the dashboard aggregation. "Today" is always an
//! explicit argument so every function here is pure.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Statutory response window: a request is due 30 days after submission.
/// Fixed at creation and never recomputed on edit.
pub const RESPONSE_WINDOW_DAYS: i64 = 30;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What the data subject is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Access,
    Deletion,
    Correction,
    Portability,
}

impl RequestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Deletion => "deletion",
            Self::Correction => "correction",
            Self::Portability => "portability",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "access" => Some(Self::Access),
            "deletion" => Some(Self::Deletion),
            "correction" => Some(Self::Correction),
            "portability" => Some(Self::Portability),
            _ => None,
        }
    }
}

/// Lifecycle status. `Completed` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Terminal statuses accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }
}

/// Handling priority. Informational only; it never affects the due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPriority {
    Low,
    Medium,
    High,
}

impl RequestPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// The statutory due date for a request submitted on `submitted`.
pub fn due_date_for(submitted: NaiveDate) -> NaiveDate {
    submitted + Duration::days(RESPONSE_WINDOW_DAYS)
}

/// Whole days until the due date. Negative once the due date has passed.
pub fn days_until_due(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// A request is overdue when its due date has passed and it is still open.
/// Terminal requests are never overdue, no matter how late they closed.
pub fn is_overdue(status: RequestStatus, due: NaiveDate, today: NaiveDate) -> bool {
    !status.is_terminal() && days_until_due(due, today) < 0
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Dashboard counters over a set of requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestStats {
    pub total: u64,
    pub pending: u64,
    #[serde(rename = "inProgress")]
    pub in_progress: u64,
    pub completed: u64,
    pub overdue: u64,
}

impl RequestStats {
    /// Aggregate `(status, due_date)` pairs as of `today`.
    ///
    /// Rows whose stored status fails to parse still count toward `total`
    /// but toward no other bucket.
    pub fn collect<I>(rows: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = (Option<RequestStatus>, NaiveDate)>,
    {
        let mut stats = Self::default();
        for (status, due) in rows {
            stats.total += 1;
            match status {
                Some(RequestStatus::Pending) => stats.pending += 1,
                Some(RequestStatus::InProgress) => stats.in_progress += 1,
                Some(RequestStatus::Completed) => stats.completed += 1,
                Some(RequestStatus::Rejected) | None => {}
            }
            if let Some(status) = status {
                if is_overdue(status, due, today) {
                    stats.overdue += 1;
                }
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    // -- Due dates --

    #[test]
    fn due_date_is_thirty_days_after_submission() {
        assert_eq!(due_date_for(date(2024, 1, 1)), date(2024, 1, 31));
    }

    #[test]
    fn due_date_crosses_month_and_year_boundaries() {
        assert_eq!(due_date_for(date(2024, 12, 15)), date(2025, 1, 14));
        // 2024 is a leap year.
        assert_eq!(due_date_for(date(2024, 2, 1)), date(2024, 3, 2));
    }

    // -- Days until due --

    #[test]
    fn days_until_due_counts_down() {
        let due = date(2024, 1, 31);
        assert_eq!(days_until_due(due, date(2024, 1, 29)), 2);
        assert_eq!(days_until_due(due, date(2024, 1, 31)), 0);
    }

    #[test]
    fn days_until_due_goes_negative_past_the_deadline() {
        assert_eq!(days_until_due(date(2024, 1, 31), date(2024, 2, 5)), -5);
    }

    // -- Overdue --

    #[test]
    fn open_request_past_due_is_overdue() {
        let due = date(2024, 1, 31);
        let today = date(2024, 2, 5);
        assert!(is_overdue(RequestStatus::Pending, due, today));
        assert!(is_overdue(RequestStatus::InProgress, due, today));
    }

    #[test]
    fn terminal_request_is_never_overdue() {
        // Six days past due but completed: not overdue.
        let due = date(2024, 1, 31);
        let today = date(2024, 2, 6);
        assert!(!is_overdue(RequestStatus::Completed, due, today));
        assert!(!is_overdue(RequestStatus::Rejected, due, today));
    }

    #[test]
    fn request_due_today_is_not_overdue() {
        let due = date(2024, 1, 31);
        assert!(!is_overdue(RequestStatus::Pending, due, due));
    }

    // -- Aggregation --

    #[test]
    fn stats_count_each_status_bucket() {
        let today = date(2024, 6, 1);
        let future = date(2024, 6, 20);
        let past = date(2024, 5, 1);
        let stats = RequestStats::collect(
            vec![
                (Some(RequestStatus::Pending), future),
                (Some(RequestStatus::Pending), past), // overdue
                (Some(RequestStatus::InProgress), future),
                (Some(RequestStatus::Completed), past), // terminal, not overdue
                (Some(RequestStatus::Rejected), past),  // terminal, not overdue
            ],
            today,
        );
        assert_eq!(
            stats,
            RequestStats {
                total: 5,
                pending: 2,
                in_progress: 1,
                completed: 1,
                overdue: 1,
            }
        );
    }

    #[test]
    fn unparseable_status_counts_only_toward_total() {
        let stats = RequestStats::collect(
            vec![(None, date(2024, 1, 1))],
            date(2024, 6, 1),
        );
        assert_eq!(stats.total, 1);
        assert_eq!(stats.overdue, 0);
    }

    // -- String round trips --

    #[test]
    fn enum_string_round_trips() {
        for kind in [
            RequestKind::Access,
            RequestKind::Deletion,
            RequestKind::Correction,
            RequestKind::Portability,
        ] {
            assert_eq!(RequestKind::parse(kind.as_str()), Some(kind));
        }
        for status in [
            RequestStatus::Pending,
            RequestStatus::InProgress,
            RequestStatus::Completed,
            RequestStatus::Rejected,
        ] {
            assert_eq!(RequestStatus::parse(status.as_str()), Some(status));
        }
        for priority in [
            RequestPriority::Low,
            RequestPriority::Medium,
            RequestPriority::High,
        ] {
            assert_eq!(RequestPriority::parse(priority.as_str()), Some(priority));
        }
        assert_eq!(RequestStatus::parse("archived"), None);
    }
}
