//! Salary processing for the payroll engine.
//!
//! This module contains the [`PayrollProcessor`], which orchestrates the
//! monthly salary runs and owns the produced records.

mod processor;

pub use processor::PayrollProcessor;
