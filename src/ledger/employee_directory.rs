//! Id-keyed employee registry.

use std::collections::BTreeMap;

use tracing::warn;

use crate::models::Employee;

/// The registry of employees, keyed by id.
///
/// Iteration is in id order, which gives salary runs a deterministic
/// processing order. Employees are never deleted; re-inserting under an
/// existing id is rejected and [`EmployeeDirectory::update`] is the only
/// way to overwrite a record wholesale.
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::EmployeeDirectory;
/// use payroll_engine::models::{Employee, Role};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut directory = EmployeeDirectory::new();
/// let employee = Employee::new(
///     "E001",
///     "Asha Nair",
///     "asha@example.com",
///     "555-0101",
///     "Engineering",
///     NaiveDate::from_ymd_opt(2021, 4, 12).unwrap(),
///     Decimal::new(45_000, 0),
///     Role::Developer {
///         programming_language: "Rust".to_string(),
///         experience_years: 5,
///     },
/// );
/// assert!(directory.insert(employee.clone()));
/// assert!(!directory.insert(employee)); // duplicate id rejected
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: BTreeMap<String, Employee>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new employee.
    ///
    /// Returns `false` and leaves the directory untouched when an employee
    /// with the same id already exists.
    pub fn insert(&mut self, employee: Employee) -> bool {
        if self.employees.contains_key(&employee.id) {
            warn!(employee_id = %employee.id, "duplicate employee id rejected");
            return false;
        }
        self.employees.insert(employee.id.clone(), employee);
        true
    }

    /// Replaces an existing employee record.
    ///
    /// Returns `false` when no employee with the given id exists.
    pub fn update(&mut self, employee: Employee) -> bool {
        if !self.employees.contains_key(&employee.id) {
            return false;
        }
        self.employees.insert(employee.id.clone(), employee);
        true
    }

    /// Looks up an employee by id.
    pub fn get(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.get(employee_id)
    }

    /// Looks up an employee by id for in-place field updates.
    pub fn get_mut(&mut self, employee_id: &str) -> Option<&mut Employee> {
        self.employees.get_mut(employee_id)
    }

    /// All employees, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Deducts days from an employee's leave balance.
    ///
    /// Returns `false` when the employee does not exist or the balance is
    /// insufficient; the balance is only changed on success.
    pub fn deduct_leave_days(&mut self, employee_id: &str, days: i32) -> bool {
        let Some(employee) = self.employees.get_mut(employee_id) else {
            return false;
        };
        if employee.available_leave_days < days {
            return false;
        }
        employee.available_leave_days -= days;
        true
    }

    /// Number of employees in the directory.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_LEAVE_DAYS, Role};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn developer(id: &str) -> Employee {
        Employee::new(
            id,
            "Asha Nair",
            "asha@example.com",
            "555-0101",
            "Engineering",
            NaiveDate::from_ymd_opt(2021, 4, 12).unwrap(),
            Decimal::new(45_000, 0),
            Role::Developer {
                programming_language: "Rust".to_string(),
                experience_years: 5,
            },
        )
    }

    #[test]
    fn test_insert_and_get() {
        let mut directory = EmployeeDirectory::new();
        assert!(directory.insert(developer("E001")));
        assert_eq!(directory.get("E001").unwrap().name, "Asha Nair");
        assert!(directory.get("E999").is_none());
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut directory = EmployeeDirectory::new();
        assert!(directory.insert(developer("E001")));

        let mut other = developer("E001");
        other.name = "Impostor".to_string();
        assert!(!directory.insert(other));
        assert_eq!(directory.get("E001").unwrap().name, "Asha Nair");
    }

    #[test]
    fn test_update_requires_existing_id() {
        let mut directory = EmployeeDirectory::new();
        assert!(!directory.update(developer("E001")));

        directory.insert(developer("E001"));
        let mut updated = developer("E001");
        updated.department = "Platform".to_string();
        assert!(directory.update(updated));
        assert_eq!(directory.get("E001").unwrap().department, "Platform");
    }

    #[test]
    fn test_iteration_is_in_id_order() {
        let mut directory = EmployeeDirectory::new();
        directory.insert(developer("E003"));
        directory.insert(developer("E001"));
        directory.insert(developer("E002"));

        let ids: Vec<&str> = directory.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["E001", "E002", "E003"]);
    }

    #[test]
    fn test_deduct_leave_days() {
        let mut directory = EmployeeDirectory::new();
        directory.insert(developer("E001"));

        assert!(directory.deduct_leave_days("E001", 5));
        assert_eq!(
            directory.get("E001").unwrap().available_leave_days,
            DEFAULT_LEAVE_DAYS - 5
        );
    }

    #[test]
    fn test_deduct_fails_on_insufficient_balance() {
        let mut directory = EmployeeDirectory::new();
        directory.insert(developer("E001"));

        assert!(!directory.deduct_leave_days("E001", DEFAULT_LEAVE_DAYS + 1));
        assert_eq!(
            directory.get("E001").unwrap().available_leave_days,
            DEFAULT_LEAVE_DAYS
        );
    }

    #[test]
    fn test_deduct_fails_on_unknown_employee() {
        let mut directory = EmployeeDirectory::new();
        assert!(!directory.deduct_leave_days("E999", 1));
    }

    #[test]
    fn test_get_mut_allows_field_updates() {
        let mut directory = EmployeeDirectory::new();
        directory.insert(developer("E001"));

        directory.get_mut("E001").unwrap().phone = "555-9999".to_string();
        assert_eq!(directory.get("E001").unwrap().phone, "555-9999");
    }
}
