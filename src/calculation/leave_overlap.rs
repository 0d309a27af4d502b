//! Leave and pay-month overlap arithmetic.
//!
//! This module computes whether and how far a leave's date range reaches
//! into a target [`PayMonth`], across month boundaries where necessary.

use chrono::Datelike;

use crate::models::{Leave, PayMonth};

/// Checks whether a leave touches the target month at all.
///
/// True when the leave starts in the month, ends in the month, or fully
/// spans it (starts before the first day and ends after the last). This is
/// a pre-filter; [`overlap_days`] alone decides how many days count, and
/// `overlap_days(..) > 0` is an equivalent test.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::falls_in_month;
/// use payroll_engine::models::{Leave, PayMonth};
/// use chrono::NaiveDate;
///
/// let leave = Leave::new(
///     "E001",
///     NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
///     "ANNUAL",
///     "",
/// );
/// assert!(falls_in_month(&leave, &PayMonth::new(1, 2024).unwrap()));
/// assert!(falls_in_month(&leave, &PayMonth::new(2, 2024).unwrap()));
/// assert!(!falls_in_month(&leave, &PayMonth::new(3, 2024).unwrap()));
/// ```
pub fn falls_in_month(leave: &Leave, period: &PayMonth) -> bool {
    let starts_in_month = leave.start_date.month() == period.month()
        && leave.start_date.year() == period.year();
    let ends_in_month =
        leave.end_date.month() == period.month() && leave.end_date.year() == period.year();
    let spans_month =
        leave.start_date < period.first_day() && leave.end_date > period.last_day();

    starts_in_month || ends_in_month || spans_month
}

/// Counts the leave days that fall inside the target month.
///
/// Clamps the leave range to the month's bounds and returns the inclusive
/// day count of the clamped range, or 0 when the ranges are disjoint. An
/// inverted leave range (end before start) also yields 0.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::overlap_days;
/// use payroll_engine::models::{Leave, PayMonth};
/// use chrono::NaiveDate;
///
/// let leave = Leave::new(
///     "E001",
///     NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
///     "ANNUAL",
///     "",
/// );
/// // Jan 30-31 and Feb 1-2.
/// assert_eq!(overlap_days(&leave, &PayMonth::new(1, 2024).unwrap()), 2);
/// assert_eq!(overlap_days(&leave, &PayMonth::new(2, 2024).unwrap()), 2);
/// ```
pub fn overlap_days(leave: &Leave, period: &PayMonth) -> u32 {
    let overlap_start = leave.start_date.max(period.first_day());
    let overlap_end = leave.end_date.min(period.last_day());

    if overlap_start > overlap_end {
        return 0;
    }

    (overlap_end.signed_duration_since(overlap_start).num_days() + 1) as u32
}
