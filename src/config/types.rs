//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are passed to the persistence collaborator and the leave ledger at
//! construction time, replacing process-wide path constants.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ledger::ValidationMode;

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_employees_file() -> String {
    "employees.csv".to_string()
}

fn default_leaves_file() -> String {
    "leaves.csv".to_string()
}

fn default_salaries_file() -> String {
    "salaries.csv".to_string()
}

/// Location of the engine's durable data files.
///
/// # Example
///
/// ```
/// use payroll_engine::config::StorageConfig;
/// use std::path::Path;
///
/// let storage = StorageConfig::new("./data");
/// assert_eq!(storage.employees_path(), Path::new("./data/employees.csv"));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the data files; created on store construction.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// File name of the employees records, relative to `data_dir`.
    #[serde(default = "default_employees_file")]
    pub employees_file: String,
    /// File name of the leave records, relative to `data_dir`.
    #[serde(default = "default_leaves_file")]
    pub leaves_file: String,
    /// File name of the salary records, relative to `data_dir`.
    #[serde(default = "default_salaries_file")]
    pub salaries_file: String,
}

impl StorageConfig {
    /// Creates a storage configuration with the default file names under
    /// the given directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            employees_file: default_employees_file(),
            leaves_file: default_leaves_file(),
            salaries_file: default_salaries_file(),
        }
    }

    /// The directory holding the data files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the employees file.
    pub fn employees_path(&self) -> PathBuf {
        self.data_dir.join(&self.employees_file)
    }

    /// Full path of the leaves file.
    pub fn leaves_path(&self) -> PathBuf {
        self.data_dir.join(&self.leaves_file)
    }

    /// Full path of the salaries file.
    pub fn salaries_path(&self) -> PathBuf {
        self.data_dir.join(&self.salaries_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

/// Complete engine configuration.
///
/// The default configuration matches the historical behavior: data under
/// `./data` and no input validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollConfig {
    /// Where the persistence collaborator keeps its files.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Validation policy applied by the leave ledger.
    #[serde(default)]
    pub validation: ValidationMode,
}
