//! Leave request model.
//!
//! This module defines the [`Leave`] struct and its [`LeaveStatus`]
//! lifecycle enum. A leave is created `Pending` and transitions to
//! `Approved` or `Rejected` exactly once through the leave ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    /// Awaiting an approve or reject decision.
    Pending,
    /// Approved; counts toward salary deductions.
    Approved,
    /// Rejected; never affects pay.
    Rejected,
}

impl LeaveStatus {
    /// Returns the stable tag used in persisted records.
    pub fn as_tag(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
        }
    }

    /// Parses a persisted tag back into a status.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PENDING" => Some(LeaveStatus::Pending),
            "APPROVED" => Some(LeaveStatus::Approved),
            "REJECTED" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A leave request for a single employee.
///
/// `employee_id` is not validated against the directory at creation time,
/// and the date range is not validated either: `end_date < start_date` is
/// representable and yields a non-positive [`Leave::duration`]. The leave
/// type is a free string; `SICK`, `CASUAL` and `ANNUAL` are the
/// conventional values.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Leave, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = Leave::new(
///     "E001",
///     NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
///     "ANNUAL",
///     "Family visit",
/// );
/// assert_eq!(leave.status, LeaveStatus::Pending);
/// assert_eq!(leave.duration(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    /// The id of the employee requesting leave.
    pub employee_id: String,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Kind of leave, stored as a free string.
    pub leave_type: String,
    /// Free-text reason for the request.
    pub reason: String,
    /// Current lifecycle status.
    pub status: LeaveStatus,
}

impl Leave {
    /// Creates a new leave request in the `Pending` state.
    pub fn new(
        employee_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        leave_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::with_status(
            employee_id,
            start_date,
            end_date,
            leave_type,
            reason,
            LeaveStatus::Pending,
        )
    }

    /// Creates a leave request with an explicit status.
    ///
    /// Used when rehydrating persisted records, so that a reloaded leave
    /// keeps its decided status instead of reverting to `Pending`.
    pub fn with_status(
        employee_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        leave_type: impl Into<String>,
        reason: impl Into<String>,
        status: LeaveStatus,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            start_date,
            end_date,
            leave_type: leave_type.into(),
            reason: reason.into(),
            status,
        }
    }

    /// Inclusive day count between start and end.
    ///
    /// Negative or zero when the range is inverted, since ranges are not
    /// validated.
    pub fn duration(&self) -> i64 {
        self.end_date
            .signed_duration_since(self.start_date)
            .num_days()
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_leave_is_pending() {
        let leave = Leave::new("E001", date(2024, 3, 1), date(2024, 3, 5), "SICK", "Flu");
        assert_eq!(leave.status, LeaveStatus::Pending);
    }

    #[test]
    fn test_duration_is_inclusive() {
        let leave = Leave::new("E001", date(2024, 3, 1), date(2024, 3, 5), "SICK", "Flu");
        assert_eq!(leave.duration(), 5);
    }

    #[test]
    fn test_single_day_leave_has_duration_one() {
        let leave = Leave::new("E001", date(2024, 3, 1), date(2024, 3, 1), "CASUAL", "");
        assert_eq!(leave.duration(), 1);
    }

    #[test]
    fn test_inverted_range_gives_non_positive_duration() {
        let leave = Leave::new("E001", date(2024, 3, 10), date(2024, 3, 5), "SICK", "");
        assert_eq!(leave.duration(), -4);
    }

    #[test]
    fn test_duration_across_month_boundary() {
        let leave = Leave::new("E001", date(2024, 1, 30), date(2024, 2, 2), "ANNUAL", "");
        assert_eq!(leave.duration(), 4);
    }

    #[test]
    fn test_status_tags_round_trip() {
        for status in [
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Rejected,
        ] {
            assert_eq!(LeaveStatus::from_tag(status.as_tag()), Some(status));
        }
    }

    #[test]
    fn test_unknown_status_tag_is_none() {
        assert_eq!(LeaveStatus::from_tag("WITHDRAWN"), None);
        assert_eq!(LeaveStatus::from_tag("pending"), None);
    }

    #[test]
    fn test_status_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
    }

    #[test]
    fn test_serialize_leave_round_trip_preserves_status() {
        let mut leave = Leave::new("E001", date(2024, 3, 1), date(2024, 3, 5), "SICK", "Flu");
        leave.status = LeaveStatus::Approved;

        let json = serde_json::to_string(&leave).unwrap();
        let deserialized: Leave = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.status, LeaveStatus::Approved);
        assert_eq!(leave, deserialized);
    }

    #[test]
    fn test_with_status_keeps_given_status() {
        let leave = Leave::with_status(
            "E001",
            date(2024, 3, 1),
            date(2024, 3, 5),
            "SICK",
            "Flu",
            LeaveStatus::Rejected,
        );
        assert_eq!(leave.status, LeaveStatus::Rejected);
    }
}
