//! Salary record model.
//!
//! This module contains the immutable [`Salary`] record produced by the
//! payroll processor, one per employee per processing run.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_tax;

/// An immutable monthly salary record.
///
/// Fields are private and only exposed through accessors: once constructed
/// a record is never mutated. [`Salary::new`] derives the tax and net
/// amounts from the gross at construction time, so the invariants
/// `net_salary == gross_salary - tax_amount` and
/// `tax_amount == tax(gross_salary)` hold for every record the processor
/// produces. Persisted records are rehydrated through
/// [`Salary::from_parts`] with their stored amounts, which are never
/// recomputed against the current brackets.
///
/// Several records may exist for the same `(employee_id, month, year)` if
/// the period is processed more than once; no deduplication is performed.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Salary;
/// use rust_decimal::Decimal;
///
/// let salary = Salary::new(
///     "E001".to_string(),
///     Decimal::new(45_000, 0),
///     Decimal::new(56_250, 0),
///     1,
///     2024,
///     0,
/// );
/// assert_eq!(salary.tax_amount(), Decimal::new(843_750, 2)); // 15% bracket
/// assert_eq!(salary.net_salary(), salary.gross_salary() - salary.tax_amount());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    employee_id: String,
    basic_salary: Decimal,
    gross_salary: Decimal,
    tax_amount: Decimal,
    net_salary: Decimal,
    month: u32,
    year: i32,
    leave_days: u32,
    process_date: NaiveDate,
}

impl Salary {
    /// Creates a salary record, deriving tax and net from the gross.
    ///
    /// The process date is stamped with the current local date.
    pub fn new(
        employee_id: String,
        basic_salary: Decimal,
        gross_salary: Decimal,
        month: u32,
        year: i32,
        leave_days: u32,
    ) -> Self {
        let tax_amount = calculate_tax(gross_salary);
        Self {
            employee_id,
            basic_salary,
            gross_salary,
            tax_amount,
            net_salary: gross_salary - tax_amount,
            month,
            year,
            leave_days,
            process_date: Local::now().date_naive(),
        }
    }

    /// Rehydrates a record from persisted parts.
    ///
    /// All amounts and the process date are taken verbatim; nothing is
    /// recomputed, so historical records keep the figures they were
    /// created with.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        employee_id: String,
        basic_salary: Decimal,
        gross_salary: Decimal,
        tax_amount: Decimal,
        net_salary: Decimal,
        month: u32,
        year: i32,
        leave_days: u32,
        process_date: NaiveDate,
    ) -> Self {
        Self {
            employee_id,
            basic_salary,
            gross_salary,
            tax_amount,
            net_salary,
            month,
            year,
            leave_days,
            process_date,
        }
    }

    /// The id of the employee this record belongs to.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// The basic salary at processing time.
    pub fn basic_salary(&self) -> Decimal {
        self.basic_salary
    }

    /// The gross salary after leave deduction.
    pub fn gross_salary(&self) -> Decimal {
        self.gross_salary
    }

    /// The tax owed on the gross salary.
    pub fn tax_amount(&self) -> Decimal {
        self.tax_amount
    }

    /// The net salary: gross minus tax.
    pub fn net_salary(&self) -> Decimal {
        self.net_salary
    }

    /// The month this record covers, 1 to 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The year this record covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Approved leave days deducted within the covered month.
    pub fn leave_days(&self) -> u32 {
        self.leave_days
    }

    /// The date the record was produced.
    pub fn process_date(&self) -> NaiveDate {
        self.process_date
    }
}
