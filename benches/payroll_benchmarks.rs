//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite tracks the cost of the hot paths:
//! - A monthly salary run across organizations of increasing size
//! - Leave-ledger application and undo churn
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use payroll_engine::ledger::LeaveLedger;
use payroll_engine::models::{Employee, Leave, LeaveStatus, Role};
use payroll_engine::payroll::PayrollProcessor;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates an organization of alternating developers and managers.
fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let id = format!("E{i:04}");
            if i % 2 == 0 {
                Employee::new(
                    id,
                    "Asha Nair",
                    "asha@example.com",
                    "555-0101",
                    "Engineering",
                    date(2021, 4, 12),
                    Decimal::new(45_000, 0),
                    Role::Developer {
                        programming_language: "Rust".to_string(),
                        experience_years: (i % 10) as u32,
                    },
                )
            } else {
                Employee::new(
                    id,
                    "Rowan Blake",
                    "rowan@example.com",
                    "555-0102",
                    "Operations",
                    date(2018, 9, 3),
                    Decimal::new(50_000, 0),
                    Role::Manager {
                        team_size: (i % 12) as u32,
                        management_level: (i % 3 + 1) as u8,
                    },
                )
            }
        })
        .collect()
}

/// Creates one approved mid-January leave per employee.
fn create_leaves(employees: &[Employee]) -> Vec<Leave> {
    employees
        .iter()
        .map(|employee| {
            let mut leave = Leave::new(
                employee.id.clone(),
                date(2024, 1, 8),
                date(2024, 1, 12),
                "ANNUAL",
                "Planned leave",
            );
            leave.status = LeaveStatus::Approved;
            leave
        })
        .collect()
}

fn bench_salary_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("salary_run");

    for size in [1usize, 10, 100, 1000] {
        let employees = create_employees(size);
        let leaves = create_leaves(&employees);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut processor = PayrollProcessor::new();
                processor
                    .process_salaries(black_box(&employees), black_box(&leaves), 1, 2024)
                    .unwrap();
                processor
            });
        });
    }

    group.finish();
}

fn bench_ledger_churn(c: &mut Criterion) {
    c.bench_function("ledger_apply_and_undo_1000", |b| {
        b.iter(|| {
            let mut ledger = LeaveLedger::new();
            for i in 0..1000u32 {
                let start = date(2024, 1, 1) + chrono::Duration::days(i64::from(i % 300));
                ledger
                    .apply(Leave::new(
                        format!("E{:04}", i % 50),
                        start,
                        start + chrono::Duration::days(4),
                        "ANNUAL",
                        "Planned leave",
                    ))
                    .unwrap();
            }
            for _ in 0..1000 {
                black_box(ledger.undo_recent());
            }
            ledger
        });
    });
}

criterion_group!(benches, bench_salary_run, bench_ledger_churn);
criterion_main!(benches);
