//! Configuration for the payroll engine.
//!
//! This module provides the explicit configuration structs handed to the
//! persistence collaborator and the leave ledger, plus an optional YAML
//! file loader.
//!
//! # Example
//!
//! ```
//! use payroll_engine::config::PayrollConfig;
//!
//! let config = PayrollConfig::default();
//! assert_eq!(config.storage.employees_file, "employees.csv");
//! ```

mod loader;
mod types;

pub use loader::load_config;
pub use types::{PayrollConfig, StorageConfig};
