//! Compliance-alert taxonomy and the deadline severity policy used by the
//! daily sweep.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// The sweep warns about pending requests due within this many days,
/// inclusive of today and of the final day.
pub const DEADLINE_WARNING_DAYS: i64 = 7;

/// At or below this many days until due, a deadline alert is `high`
/// severity; above it, `medium`.
pub const HIGH_SEVERITY_DAYS: i64 = 3;

/// Jurisdiction tag used for alerts that are not tied to a single regime.
pub const JURISDICTION_GLOBAL: &str = "Global";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What kind of regulatory event an alert describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    NewLaw,
    Deadline,
    Update,
    Breach,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewLaw => "new-law",
            Self::Deadline => "deadline",
            Self::Update => "update",
            Self::Breach => "breach",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new-law" => Some(Self::NewLaw),
            "deadline" => Some(Self::Deadline),
            "update" => Some(Self::Update),
            "breach" => Some(Self::Breach),
            _ => None,
        }
    }
}

/// Alert severity, from informational to critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Deadline policy
// ---------------------------------------------------------------------------

/// Severity of a deadline alert for a request due in `days_until_due` days.
pub fn deadline_severity(days_until_due: i64) -> AlertSeverity {
    if days_until_due <= HIGH_SEVERITY_DAYS {
        AlertSeverity::High
    } else {
        AlertSeverity::Medium
    }
}

/// The inclusive `[start, end]` date window the daily sweep scans for
/// upcoming due dates.
pub fn deadline_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Duration::days(DEADLINE_WARNING_DAYS))
}
