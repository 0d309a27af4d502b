//! CSV-backed persistence collaborator.
//!
//! The [`CsvStore`] owns the data directory named by a [`StorageConfig`]:
//! it creates the directory and its files on construction, loads records
//! best-effort at startup, and rewrites whole files at checkpoints.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, warn};

use crate::config::StorageConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, Leave, Salary};

use super::codec;

fn io_error(path: &Path, error: &io::Error) -> PayrollError {
    PayrollError::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

/// The CSV persistence collaborator.
///
/// Encoding details live entirely in this module and [`super::codec`];
/// the rest of the engine only sees collections of records. Loading is
/// best-effort: a malformed line is logged and skipped rather than
/// aborting the whole load, and a missing file simply yields no records.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::StorageConfig;
/// use payroll_engine::persistence::CsvStore;
///
/// let store = CsvStore::new(StorageConfig::new("./data"))?;
/// let employees = store.load_employees()?;
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvStore {
    config: StorageConfig,
}

impl CsvStore {
    /// Creates a store, ensuring the data directory and files exist.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Io`] when the directory or a file cannot
    /// be created.
    pub fn new(config: StorageConfig) -> PayrollResult<Self> {
        fs::create_dir_all(config.data_dir())
            .map_err(|e| io_error(config.data_dir(), &e))?;
        for path in [
            config.employees_path(),
            config.leaves_path(),
            config.salaries_path(),
        ] {
            Self::ensure_file(&path)?;
        }
        Ok(Self { config })
    }

    fn ensure_file(path: &Path) -> PayrollResult<()> {
        if !path.exists() {
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| io_error(path, &e))?;
            info!(path = %path.display(), "created data file");
        }
        Ok(())
    }

    /// The storage configuration this store was built with.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Loads all well-formed employee records.
    pub fn load_employees(&self) -> PayrollResult<Vec<Employee>> {
        self.load_records(
            &self.config.employees_path(),
            codec::decode_employee,
            "employees",
        )
    }

    /// Loads all well-formed leave records.
    pub fn load_leaves(&self) -> PayrollResult<Vec<Leave>> {
        self.load_records(&self.config.leaves_path(), codec::decode_leave, "leaves")
    }

    /// Loads all well-formed salary records.
    pub fn load_salaries(&self) -> PayrollResult<Vec<Salary>> {
        self.load_records(
            &self.config.salaries_path(),
            codec::decode_salary,
            "salaries",
        )
    }

    /// Saves all employee records, replacing the file contents.
    pub fn save_employees<'a, I>(&self, employees: I) -> PayrollResult<()>
    where
        I: IntoIterator<Item = &'a Employee>,
    {
        self.save_records(
            &self.config.employees_path(),
            employees,
            codec::encode_employee,
            "employees",
        )
    }

    /// Saves all leave records, replacing the file contents.
    pub fn save_leaves<'a, I>(&self, leaves: I) -> PayrollResult<()>
    where
        I: IntoIterator<Item = &'a Leave>,
    {
        self.save_records(
            &self.config.leaves_path(),
            leaves,
            codec::encode_leave,
            "leaves",
        )
    }

    /// Saves all salary records, replacing the file contents.
    pub fn save_salaries<'a, I>(&self, salaries: I) -> PayrollResult<()>
    where
        I: IntoIterator<Item = &'a Salary>,
    {
        self.save_records(
            &self.config.salaries_path(),
            salaries,
            codec::encode_salary,
            "salaries",
        )
    }

    fn load_records<T>(
        &self,
        path: &Path,
        decode: impl Fn(&str) -> PayrollResult<T>,
        kind: &str,
    ) -> PayrollResult<Vec<T>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(kind, path = %path.display(), "no data file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(io_error(path, &e)),
        };

        let mut records = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match decode(line) {
                Ok(record) => records.push(record),
                Err(error) => warn!(kind, %error, "skipping malformed record"),
            }
        }

        info!(kind, count = records.len(), path = %path.display(), "records loaded");
        Ok(records)
    }

    fn save_records<T>(
        &self,
        path: &Path,
        records: impl IntoIterator<Item = T>,
        encode: impl Fn(T) -> String,
        kind: &str,
    ) -> PayrollResult<()> {
        let mut content = String::new();
        let mut count = 0usize;
        for record in records {
            content.push_str(&encode(record));
            content.push('\n');
            count += 1;
        }

        fs::write(path, content).map_err(|e| io_error(path, &e))?;
        info!(kind, count, path = %path.display(), "records saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveStatus, Role};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_in(dir: &Path) -> CsvStore {
        CsvStore::new(StorageConfig::new(dir)).unwrap()
    }

    fn developer(id: &str) -> Employee {
        Employee::new(
            id,
            "Asha Nair",
            "asha@example.com",
            "555-0101",
            "Engineering",
            date(2021, 4, 12),
            dec("45000"),
            Role::Developer {
                programming_language: "Rust".to_string(),
                experience_years: 5,
            },
        )
    }

    #[test]
    fn test_new_creates_directory_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested").join("data");
        let store = CsvStore::new(StorageConfig::new(&data_dir)).unwrap();

        assert!(store.config().employees_path().exists());
        assert!(store.config().leaves_path().exists());
        assert!(store.config().salaries_path().exists());
    }

    #[test]
    fn test_fresh_store_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(store.load_employees().unwrap().is_empty());
        assert!(store.load_leaves().unwrap().is_empty());
        assert!(store.load_salaries().unwrap().is_empty());
    }

    #[test]
    fn test_employee_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let employees = vec![developer("E001"), developer("E002")];
        store.save_employees(&employees).unwrap();

        let loaded = store.load_employees().unwrap();
        assert_eq!(loaded, employees);
    }

    #[test]
    fn test_leave_save_and_load_preserves_status() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let leave = Leave::with_status(
            "E001",
            date(2024, 3, 4),
            date(2024, 3, 8),
            "SICK",
            "Flu, then rest",
            LeaveStatus::Approved,
        );
        store.save_leaves([&leave]).unwrap();

        let loaded = store.load_leaves().unwrap();
        assert_eq!(loaded, vec![leave]);
        assert_eq!(loaded[0].status, LeaveStatus::Approved);
    }

    #[test]
    fn test_salary_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let salary = Salary::from_parts(
            "E001".to_string(),
            dec("45000"),
            dec("56250"),
            dec("8437.50"),
            dec("47812.50"),
            1,
            2024,
            0,
            date(2024, 2, 1),
        );
        store.save_salaries([&salary]).unwrap();

        assert_eq!(store.load_salaries().unwrap(), vec![salary]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let good = codec::encode_employee(&developer("E001"));
        let content = format!(
            "{good}\nE002,too,short\nE003,A,B,C,D,2021-04-12,45000,20,Wizard,staff,5\n"
        );
        fs::write(store.config().employees_path(), content).unwrap();

        let loaded = store.load_employees().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "E001");
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let good = codec::encode_leave(&Leave::new(
            "E001",
            date(2024, 3, 4),
            date(2024, 3, 8),
            "SICK",
            "Flu",
        ));
        fs::write(store.config().leaves_path(), format!("\n{good}\n\n")).unwrap();

        assert_eq!(store.load_leaves().unwrap().len(), 1);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .save_employees(&[developer("E001"), developer("E002")])
            .unwrap();
        store.save_employees(&[developer("E003")]).unwrap();

        let loaded = store.load_employees().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "E003");
    }
}
