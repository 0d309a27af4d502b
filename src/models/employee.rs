//! Employee model and role-specific salary formulas.
//!
//! This module defines the [`Employee`] struct and the [`Role`] enum that
//! carries the variant-specific fields and gross-salary formula for
//! managers and developers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_tax;

/// Default number of available leave days granted at creation.
pub const DEFAULT_LEAVE_DAYS: i32 = 20;

/// Technical allowance for developers: 15% of basic salary.
fn technical_allowance_rate() -> Decimal {
    Decimal::new(15, 2)
}

/// Experience bonus for developers: 2% of basic salary per year.
fn experience_bonus_rate() -> Decimal {
    Decimal::new(2, 2)
}

/// Management allowance for managers: 10% of basic salary per level.
fn management_allowance_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Team allowance for managers: 0.5% of basic salary per team member.
fn team_allowance_rate() -> Decimal {
    Decimal::new(5, 3)
}

/// The role an employee holds, with the fields specific to that role.
///
/// The role determines which gross-salary formula applies. The tag returned
/// by [`Role::tag`] is stable and is used for serialization dispatch when
/// records are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    /// A manager leading a team.
    Manager {
        /// Number of team members reporting to this manager.
        team_size: u32,
        /// Management level: 1 junior, 2 mid, 3 senior.
        management_level: u8,
    },
    /// A developer on a delivery team.
    Developer {
        /// Primary programming language.
        programming_language: String,
        /// Years of professional experience.
        experience_years: u32,
    },
}

impl Role {
    /// Returns the stable tag identifying this role in persisted records.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Manager { .. } => "Manager",
            Role::Developer { .. } => "Developer",
        }
    }
}

/// An employee subject to payroll processing.
///
/// Identity (`id`) is immutable by convention after insertion into the
/// directory; the remaining fields are plain data and may be updated in
/// place. No field is validated: a negative basic salary flows through the
/// salary formulas unchanged, and callers are expected to supply sensible
/// values.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, Role};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let developer = Employee::new(
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
/// assert_eq!(developer.gross_salary(), Decimal::new(56_250, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Department the employee belongs to.
    pub department: String,
    /// The date the employee joined the organization.
    pub joining_date: NaiveDate,
    /// Monthly basic salary before allowances.
    pub basic_salary: Decimal,
    /// Remaining leave-day balance for the year.
    pub available_leave_days: i32,
    /// The employee's role and its specific fields.
    pub role: Role,
}

impl Employee {
    /// Creates a new employee with the default leave-day balance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        department: impl Into<String>,
        joining_date: NaiveDate,
        basic_salary: Decimal,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            department: department.into(),
            joining_date,
            basic_salary,
            available_leave_days: DEFAULT_LEAVE_DAYS,
            role,
        }
    }

    /// Calculates the gross monthly salary for this employee.
    ///
    /// The formula depends on the role:
    /// - Developer: `basic * (1 + 0.15 + 0.02 * experience_years)`
    /// - Manager: `basic * (1 + 0.10 * management_level + 0.005 * team_size)`
    ///
    /// The result is a pure function of the employee's current fields.
    pub fn gross_salary(&self) -> Decimal {
        match &self.role {
            Role::Manager {
                team_size,
                management_level,
            } => {
                let management_allowance = self.basic_salary
                    * (management_allowance_rate() * Decimal::from(*management_level));
                let team_allowance =
                    self.basic_salary * (team_allowance_rate() * Decimal::from(*team_size));
                self.basic_salary + management_allowance + team_allowance
            }
            Role::Developer {
                experience_years, ..
            } => {
                let technical_allowance = self.basic_salary * technical_allowance_rate();
                let experience_bonus =
                    self.basic_salary * (experience_bonus_rate() * Decimal::from(*experience_years));
                self.basic_salary + technical_allowance + experience_bonus
            }
        }
    }

    /// Calculates the net monthly salary: gross minus tiered tax.
    pub fn net_salary(&self) -> Decimal {
        let gross = self.gross_salary();
        gross - calculate_tax(gross)
    }

    /// Returns the stable role tag for this employee.
    pub fn role_tag(&self) -> &'static str {
        self.role.tag()
    }
}
