//! Configuration loading functionality.
//!
//! This module loads a [`PayrollConfig`] from a YAML file. Configuration
//! is optional: callers that do not ship a file use
//! `PayrollConfig::default()`.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Loads the engine configuration from a YAML file.
///
/// # Errors
///
/// Returns [`PayrollError::ConfigNotFound`] when the file cannot be read
/// and [`PayrollError::ConfigParseError`] when it is not valid YAML for
/// [`PayrollConfig`].
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::load_config;
///
/// let config = load_config("./payroll.yaml")?;
/// println!("data dir: {}", config.storage.data_dir().display());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> PayrollResult<PayrollConfig> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
