//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: the tiered tax
//! brackets and the leave/month overlap arithmetic that feeds salary
//! deductions.

mod leave_overlap;
mod tax;

pub use leave_overlap::{falls_in_month, overlap_days};
pub use tax::{
    calculate_tax, lower_bracket_ceiling, lower_bracket_rate, middle_bracket_ceiling,
    middle_bracket_rate, upper_bracket_rate,
};
