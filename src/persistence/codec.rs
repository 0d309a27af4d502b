//! Line codec for the CSV data files.
//!
//! Each record is one comma-separated line. The only field that may
//! legitimately contain commas is a leave's free-text reason; it is
//! escaped to semicolons on encode and restored on decode. Employee lines
//! carry a role tag that selects which variant fields follow.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, Leave, LeaveStatus, Role, Salary};

fn malformed(line: &str, message: impl Into<String>) -> PayrollError {
    PayrollError::MalformedRecord {
        line: line.to_string(),
        message: message.into(),
    }
}

fn parse_field<T: FromStr>(line: &str, value: &str, what: &str) -> PayrollResult<T> {
    value
        .parse()
        .map_err(|_| malformed(line, format!("invalid {what}: '{value}'")))
}

/// Encodes an employee as one CSV line.
///
/// Layout: the eight common fields, the role tag, then the role-specific
/// fields.
pub fn encode_employee(employee: &Employee) -> String {
    let common = format!(
        "{},{},{},{},{},{},{},{}",
        employee.id,
        employee.name,
        employee.email,
        employee.phone,
        employee.department,
        employee.joining_date,
        employee.basic_salary,
        employee.available_leave_days,
    );
    match &employee.role {
        Role::Manager {
            team_size,
            management_level,
        } => format!("{common},Manager,{team_size},{management_level}"),
        Role::Developer {
            programming_language,
            experience_years,
        } => format!("{common},Developer,{programming_language},{experience_years}"),
    }
}

/// Decodes an employee from one CSV line.
///
/// # Errors
///
/// Returns [`PayrollError::MalformedRecord`] for a short or unparsable
/// line and [`PayrollError::UnknownRole`] for an unrecognized role tag.
pub fn decode_employee(line: &str) -> PayrollResult<Employee> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 11 {
        return Err(malformed(line, "expected at least 11 fields"));
    }

    let role = match fields[8] {
        "Manager" => Role::Manager {
            team_size: parse_field(line, fields[9], "team size")?,
            management_level: parse_field(line, fields[10], "management level")?,
        },
        "Developer" => Role::Developer {
            programming_language: fields[9].to_string(),
            experience_years: parse_field(line, fields[10], "experience years")?,
        },
        tag => {
            return Err(PayrollError::UnknownRole {
                tag: tag.to_string(),
            });
        }
    };

    Ok(Employee {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        email: fields[2].to_string(),
        phone: fields[3].to_string(),
        department: fields[4].to_string(),
        joining_date: parse_field::<NaiveDate>(line, fields[5], "joining date")?,
        basic_salary: parse_field::<Decimal>(line, fields[6], "basic salary")?,
        available_leave_days: parse_field(line, fields[7], "available leave days")?,
        role,
    })
}

/// Encodes a leave as one CSV line, escaping commas in the reason.
pub fn encode_leave(leave: &Leave) -> String {
    format!(
        "{},{},{},{},{},{}",
        leave.employee_id,
        leave.start_date,
        leave.end_date,
        leave.leave_type,
        leave.reason.replace(',', ";"),
        leave.status.as_tag(),
    )
}

/// Decodes a leave from one CSV line, restoring commas in the reason.
///
/// The persisted status is kept as-is; a reloaded leave never reverts to
/// `PENDING`.
pub fn decode_leave(line: &str) -> PayrollResult<Leave> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 6 {
        return Err(malformed(line, "expected 6 fields"));
    }

    let status = LeaveStatus::from_tag(fields[5])
        .ok_or_else(|| malformed(line, format!("unknown status: '{}'", fields[5])))?;

    Ok(Leave::with_status(
        fields[0],
        parse_field::<NaiveDate>(line, fields[1], "start date")?,
        parse_field::<NaiveDate>(line, fields[2], "end date")?,
        fields[3],
        fields[4].replace(';', ","),
        status,
    ))
}

/// Encodes a salary record as one CSV line.
pub fn encode_salary(salary: &Salary) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{}",
        salary.employee_id(),
        salary.basic_salary(),
        salary.gross_salary(),
        salary.tax_amount(),
        salary.net_salary(),
        salary.month(),
        salary.year(),
        salary.leave_days(),
        salary.process_date(),
    )
}

/// Decodes a salary record from one CSV line.
///
/// All amounts are restored verbatim; nothing is recomputed against the
/// current tax brackets.
pub fn decode_salary(line: &str) -> PayrollResult<Salary> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 9 {
        return Err(malformed(line, "expected 9 fields"));
    }

    Ok(Salary::from_parts(
        fields[0].to_string(),
        parse_field::<Decimal>(line, fields[1], "basic salary")?,
        parse_field::<Decimal>(line, fields[2], "gross salary")?,
        parse_field::<Decimal>(line, fields[3], "tax amount")?,
        parse_field::<Decimal>(line, fields[4], "net salary")?,
        parse_field(line, fields[5], "month")?,
        parse_field(line, fields[6], "year")?,
        parse_field(line, fields[7], "leave days")?,
        parse_field::<NaiveDate>(line, fields[8], "process date")?,
    ))
}
