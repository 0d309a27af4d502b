//! Stateful registries for the payroll engine.
//!
//! This module contains the [`LeaveLedger`] (the authoritative leave
//! collection with its undo stack) and the [`EmployeeDirectory`].

mod employee_directory;
mod leave_ledger;

pub use employee_directory::EmployeeDirectory;
pub use leave_ledger::{LeaveLedger, ValidationMode};
