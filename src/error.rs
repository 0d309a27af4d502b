//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing and
//! persistence.
//!
//! Lookups that simply find nothing (approving an unknown leave, viewing a
//! salary that was never processed) are not errors; those operations return
//! `bool` or `Option` instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A data file could not be read or written.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The path of the file being accessed.
        path: String,
        /// A description of the underlying I/O failure.
        message: String,
    },

    /// A persisted record could not be decoded.
    #[error("Malformed record '{line}': {message}")]
    MalformedRecord {
        /// The raw line that failed to decode.
        line: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A persisted employee record carried an unrecognized role tag.
    #[error("Unknown employee role tag: {tag}")]
    UnknownRole {
        /// The role tag that was not recognized.
        tag: String,
    },

    /// A month/year pair does not describe a valid calendar month.
    #[error("Invalid pay period: month {month}, year {year}")]
    InvalidPeriod {
        /// The requested month (expected 1 to 12).
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// A leave date range ends before it starts (strict validation only).
    #[error("Invalid leave date range: {start} to {end}")]
    InvalidDateRange {
        /// The start of the leave range.
        start: NaiveDate,
        /// The end of the leave range.
        end: NaiveDate,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
