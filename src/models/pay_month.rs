//! Target pay-period model.
//!
//! This module contains the [`PayMonth`] type: a validated month/year pair
//! with its calendar bounds, used as the window for leave-overlap
//! accounting and salary processing.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{PayrollError, PayrollResult};

/// A calendar month targeted by a salary run.
///
/// Construction validates the month/year pair once, so the overlap
/// arithmetic downstream never has to handle invalid periods.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
/// use chrono::NaiveDate;
///
/// let period = PayMonth::new(2, 2024).unwrap();
/// assert_eq!(period.length_in_days(), 29);
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()));
/// assert!(PayMonth::new(13, 2024).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayMonth {
    month: u32,
    year: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl PayMonth {
    /// Creates a pay month for the given month (1 to 12) and year.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidPeriod`] when the pair does not
    /// describe a representable calendar month.
    pub fn new(month: u32, year: i32) -> PayrollResult<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(PayrollError::InvalidPeriod { month, year })?;
        let last_day = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.pred_opt())
            .ok_or(PayrollError::InvalidPeriod { month, year })?;
        Ok(Self {
            month,
            year,
            first_day,
            last_day,
        })
    }

    /// The month number, 1 to 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// The calendar length of the month in days (28 to 31).
    pub fn length_in_days(&self) -> u32 {
        self.last_day.day()
    }

    /// Checks whether a date falls within this month (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }
}
