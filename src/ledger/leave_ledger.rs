//! The leave ledger and its undo stack.
//!
//! This module contains the [`LeaveLedger`], the authoritative owner of
//! all leave requests, together with the LIFO stack of recent applications
//! that backs the undo operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Leave, LeaveStatus};

/// Input-validation policy for leave applications.
///
/// The default `Permissive` mode reproduces the historical behavior of the
/// system: nothing is validated and every application is accepted. The
/// opt-in `Strict` mode rejects inverted date ranges at application time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Accept every application unchecked.
    #[default]
    Permissive,
    /// Reject applications whose end date precedes their start date.
    Strict,
}

/// A ledger entry: a leave plus the stable handle the undo stack uses.
#[derive(Debug, Clone)]
struct LedgerEntry {
    id: u64,
    leave: Leave,
}

/// The authoritative, ordered collection of leave requests.
///
/// Leaves are stored in application order. Each entry carries a monotone
/// internal id; the undo stack records ids rather than copies, so popping
/// the stack and removing from the list always operate on the same logical
/// entry, even after the leave's status has changed.
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::LeaveLedger;
/// use payroll_engine::models::Leave;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
///
/// let mut ledger = LeaveLedger::new();
/// ledger.apply(Leave::new("E001", start, end, "ANNUAL", "Trip")).unwrap();
/// assert!(ledger.approve("E001", start));
///
/// // Undo removes the application even though it was approved.
/// let undone = ledger.undo_recent().unwrap();
/// assert_eq!(undone.employee_id, "E001");
/// assert!(ledger.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeaveLedger {
    entries: Vec<LedgerEntry>,
    recent: Vec<u64>,
    next_id: u64,
    validation: ValidationMode,
}

impl LeaveLedger {
    /// Creates an empty ledger in the default permissive mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger with the given validation mode.
    pub fn with_validation(validation: ValidationMode) -> Self {
        Self {
            validation,
            ..Self::default()
        }
    }

    /// The ledger's validation mode.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Registers a new leave application.
    ///
    /// The leave is appended to the ledger and pushed onto the recent
    /// applications stack. No conflict or overlap checks are made against
    /// existing leaves for the same employee. In permissive mode this
    /// always succeeds; in strict mode an inverted date range is rejected
    /// with [`PayrollError::InvalidDateRange`] and nothing is recorded.
    pub fn apply(&mut self, leave: Leave) -> PayrollResult<()> {
        if self.validation == ValidationMode::Strict && leave.end_date < leave.start_date {
            return Err(PayrollError::InvalidDateRange {
                start: leave.start_date,
                end: leave.end_date,
            });
        }

        debug!(
            employee_id = %leave.employee_id,
            start = %leave.start_date,
            end = %leave.end_date,
            leave_type = %leave.leave_type,
            "leave applied"
        );
        self.push(leave);
        Ok(())
    }

    /// Re-registers a persisted leave during startup.
    ///
    /// Skips validation and keeps the stored status, but still pushes the
    /// recent stack so undo keeps working across a reload.
    pub fn restore(&mut self, leave: Leave) {
        self.push(leave);
    }

    fn push(&mut self, leave: Leave) {
        let id = self.next_id;
        self.next_id += 1;
        self.recent.push(id);
        self.entries.push(LedgerEntry { id, leave });
    }

    /// Approves the first pending leave matching employee and start date.
    ///
    /// Scans in application order; the end date is not consulted, so of
    /// two pending leaves sharing an employee and start date only the
    /// earliest-applied one is affected. Returns `false` when no pending
    /// match exists.
    pub fn approve(&mut self, employee_id: &str, start_date: NaiveDate) -> bool {
        self.transition(employee_id, start_date, LeaveStatus::Approved)
    }

    /// Rejects the first pending leave matching employee and start date.
    ///
    /// Symmetric to [`LeaveLedger::approve`].
    pub fn reject(&mut self, employee_id: &str, start_date: NaiveDate) -> bool {
        self.transition(employee_id, start_date, LeaveStatus::Rejected)
    }

    fn transition(&mut self, employee_id: &str, start_date: NaiveDate, to: LeaveStatus) -> bool {
        for entry in &mut self.entries {
            let leave = &mut entry.leave;
            if leave.employee_id == employee_id
                && leave.start_date == start_date
                && leave.status == LeaveStatus::Pending
            {
                leave.status = to;
                debug!(employee_id, start = %start_date, status = %to, "leave transitioned");
                return true;
            }
        }
        false
    }

    /// Peeks at the most recently applied leave without removing it.
    pub fn most_recent(&self) -> Option<&Leave> {
        let id = *self.recent.last()?;
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.leave)
    }

    /// Undoes the most recent application.
    ///
    /// Pops the recent stack and removes that same leave from the ledger,
    /// regardless of its current status: an already-approved leave is
    /// undone silently. Returns `None` when the stack is empty.
    pub fn undo_recent(&mut self) -> Option<Leave> {
        let id = self.recent.pop()?;
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let entry = self.entries.remove(index);
        info!(
            employee_id = %entry.leave.employee_id,
            start = %entry.leave.start_date,
            status = %entry.leave.status,
            "leave application undone"
        );
        Some(entry.leave)
    }

    /// All leaves, in application order.
    pub fn leaves(&self) -> impl Iterator<Item = &Leave> + Clone {
        self.entries.iter().map(|entry| &entry.leave)
    }

    /// All leaves for one employee, in application order.
    pub fn leaves_for<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a Leave> + 'a {
        self.leaves()
            .filter(move |leave| leave.employee_id == employee_id)
    }

    /// Number of leaves currently in the ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no leaves.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
