//! Monthly salary processing.
//!
//! This module contains the [`PayrollProcessor`], which turns employees,
//! their approved leave history, and a target month into immutable
//! [`Salary`] records, and keeps the per-employee queues of records
//! awaiting downstream processing.

use std::collections::HashMap;
use std::collections::VecDeque;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::{falls_in_month, overlap_days};
use crate::error::PayrollResult;
use crate::models::{Employee, Leave, LeaveStatus, PayMonth, Salary};

/// Produces and stores monthly salary records.
///
/// The processor owns the append-only master salary list and a FIFO queue
/// of pending records per employee. The queues index into the master list,
/// so both expose the very same records: popping a queue never removes
/// anything from the master list.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, Role};
/// use payroll_engine::payroll::PayrollProcessor;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(
///     "E001",
///     "Asha Nair",
///     "asha@example.com",
///     "555-0101",
///     "Engineering",
///     NaiveDate::from_ymd_opt(2021, 4, 12).unwrap(),
///     Decimal::new(45_000, 0),
///     Role::Developer {
///         programming_language: "Rust".to_string(),
///         experience_years: 5,
///     },
/// );
///
/// let mut processor = PayrollProcessor::new();
/// processor.process_salaries([&employee], [], 1, 2024).unwrap();
///
/// let record = processor.salary_details("E001", 1, 2024).unwrap();
/// assert_eq!(record.gross_salary(), Decimal::new(56_250, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollProcessor {
    salaries: Vec<Salary>,
    pending: HashMap<String, VecDeque<usize>>,
}

impl PayrollProcessor {
    /// Creates a processor with no salary history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes salaries for every given employee for one month.
    ///
    /// For each employee, independently: sums the overlap days of that
    /// employee's approved leaves with the target month, prorates the
    /// basic salary into a leave deduction, computes gross, tax and net,
    /// and appends the resulting record to the master list and the
    /// employee's pending queue. There is no transactionality across
    /// employees.
    ///
    /// The gross salary is not clamped: leave days exceeding the month
    /// drive it negative, as the formulas dictate.
    ///
    /// Returns the number of employees processed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PayrollError::InvalidPeriod`] when
    /// month/year is not a valid calendar month; no employee is processed
    /// in that case.
    pub fn process_salaries<'a, E, L>(
        &mut self,
        employees: E,
        leaves: L,
        month: u32,
        year: i32,
    ) -> PayrollResult<usize>
    where
        E: IntoIterator<Item = &'a Employee>,
        L: IntoIterator<Item = &'a Leave>,
        L::IntoIter: Clone,
    {
        let period = PayMonth::new(month, year)?;
        let leaves = leaves.into_iter();

        let mut processed = 0;
        for employee in employees {
            self.process_one(employee, leaves.clone(), &period);
            processed += 1;
        }

        info!(month, year, processed, "salary run complete");
        Ok(processed)
    }

    fn process_one<'a>(
        &mut self,
        employee: &Employee,
        leaves: impl Iterator<Item = &'a Leave>,
        period: &PayMonth,
    ) {
        let leave_days: u32 = leaves
            .filter(|leave| {
                leave.employee_id == employee.id
                    && leave.status == LeaveStatus::Approved
                    && falls_in_month(leave, period)
            })
            .map(|leave| overlap_days(leave, period))
            .sum();

        let leave_deduction = if leave_days > 0 {
            employee.basic_salary / Decimal::from(period.length_in_days())
                * Decimal::from(leave_days)
        } else {
            Decimal::ZERO
        };

        let gross_salary = employee.gross_salary() - leave_deduction;
        debug!(
            employee_id = %employee.id,
            leave_days,
            %leave_deduction,
            %gross_salary,
            "salary computed"
        );

        let salary = Salary::new(
            employee.id.clone(),
            employee.basic_salary,
            gross_salary,
            period.month(),
            period.year(),
            leave_days,
        );
        self.record(salary);
    }

    fn record(&mut self, salary: Salary) {
        let index = self.salaries.len();
        self.pending
            .entry(salary.employee_id().to_string())
            .or_default()
            .push_back(index);
        self.salaries.push(salary);
    }

    /// Re-registers a persisted salary record during startup.
    ///
    /// Appends to the master list and the employee's pending queue, the
    /// same bookkeeping a fresh processing run performs.
    pub fn restore(&mut self, salary: Salary) {
        self.record(salary);
    }

    /// Finds the salary record for an employee and period.
    ///
    /// Scans the master list in insertion order and returns the first
    /// match, so when the same period was processed more than once the
    /// earliest record wins.
    pub fn salary_details(&self, employee_id: &str, month: u32, year: i32) -> Option<&Salary> {
        self.salaries.iter().find(|salary| {
            salary.employee_id() == employee_id
                && salary.month() == month
                && salary.year() == year
        })
    }

    /// The master salary list, in processing order.
    pub fn salaries(&self) -> &[Salary] {
        &self.salaries
    }

    /// All salary records for one employee, in processing order.
    pub fn salaries_for<'a>(
        &'a self,
        employee_id: &'a str,
    ) -> impl Iterator<Item = &'a Salary> + 'a {
        self.salaries
            .iter()
            .filter(move |salary| salary.employee_id() == employee_id)
    }

    /// The pending queue for one employee, oldest first, without draining.
    pub fn pending_for<'a>(
        &'a self,
        employee_id: &'a str,
    ) -> impl Iterator<Item = &'a Salary> + 'a {
        self.pending
            .get(employee_id)
            .into_iter()
            .flatten()
            .map(|&index| &self.salaries[index])
    }

    /// Number of records waiting in an employee's pending queue.
    pub fn pending_count(&self, employee_id: &str) -> usize {
        self.pending
            .get(employee_id)
            .map_or(0, |queue| queue.len())
    }

    /// Dequeues the oldest pending record for an employee.
    ///
    /// Returns `None` when the queue is empty or absent. The record stays
    /// in the master list; only the queue entry is consumed.
    pub fn pop_next_pending(&mut self, employee_id: &str) -> Option<&Salary> {
        let index = self.pending.get_mut(employee_id)?.pop_front()?;
        Some(&self.salaries[index])
    }
}
