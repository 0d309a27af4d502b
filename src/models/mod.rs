//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod leave;
mod pay_month;
mod salary;

pub use employee::{DEFAULT_LEAVE_DAYS, Employee, Role};
pub use leave::{Leave, LeaveStatus};
pub use pay_month::PayMonth;
pub use salary::Salary;
