//! Top-level wiring of the payroll engine.
//!
//! This module contains the [`PayrollSystem`] facade, which owns the
//! employee directory, the leave ledger, the payroll processor, and the
//! persistence store, and moves records between them at startup and at
//! checkpoints.

use tracing::info;

use crate::config::PayrollConfig;
use crate::error::PayrollResult;
use crate::ledger::{EmployeeDirectory, LeaveLedger};
use crate::payroll::PayrollProcessor;
use crate::persistence::CsvStore;

/// The assembled payroll engine.
///
/// `bootstrap` loads the three persisted collections into the in-memory
/// components; `checkpoint` writes the current collections back. Between
/// the two, callers drive the components directly through the accessors.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::system::PayrollSystem;
///
/// let mut system = PayrollSystem::bootstrap(PayrollConfig::default())?;
/// system.process_month(1, 2024)?;
/// system.checkpoint()?;
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug)]
pub struct PayrollSystem {
    directory: EmployeeDirectory,
    ledger: LeaveLedger,
    processor: PayrollProcessor,
    store: CsvStore,
}

impl PayrollSystem {
    /// Builds the system and seeds it from persisted state.
    ///
    /// Employees whose id repeats in the data file are rejected by the
    /// directory exactly as a live duplicate insert would be; leaves and
    /// salaries are restored with their stored statuses and amounts.
    pub fn bootstrap(config: PayrollConfig) -> PayrollResult<Self> {
        let store = CsvStore::new(config.storage)?;

        let mut directory = EmployeeDirectory::new();
        for employee in store.load_employees()? {
            directory.insert(employee);
        }

        let mut ledger = LeaveLedger::with_validation(config.validation);
        for leave in store.load_leaves()? {
            ledger.restore(leave);
        }

        let mut processor = PayrollProcessor::new();
        for salary in store.load_salaries()? {
            processor.restore(salary);
        }

        info!(
            employees = directory.len(),
            leaves = ledger.len(),
            salaries = processor.salaries().len(),
            "payroll system bootstrapped"
        );

        Ok(Self {
            directory,
            ledger,
            processor,
            store,
        })
    }

    /// Writes the current collections back to durable storage.
    pub fn checkpoint(&self) -> PayrollResult<()> {
        self.store.save_employees(self.directory.iter())?;
        self.store.save_leaves(self.ledger.leaves())?;
        self.store.save_salaries(self.processor.salaries())?;
        Ok(())
    }

    /// Runs a salary month for every employee in the directory.
    ///
    /// Returns the number of employees processed.
    pub fn process_month(&mut self, month: u32, year: i32) -> PayrollResult<usize> {
        self.processor
            .process_salaries(self.directory.iter(), self.ledger.leaves(), month, year)
    }

    /// The employee directory.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// The employee directory, for mutations.
    pub fn directory_mut(&mut self) -> &mut EmployeeDirectory {
        &mut self.directory
    }

    /// The leave ledger.
    pub fn ledger(&self) -> &LeaveLedger {
        &self.ledger
    }

    /// The leave ledger, for mutations.
    pub fn ledger_mut(&mut self) -> &mut LeaveLedger {
        &mut self.ledger
    }

    /// The payroll processor.
    pub fn processor(&self) -> &PayrollProcessor {
        &self.processor
    }

    /// The payroll processor, for mutations.
    pub fn processor_mut(&mut self) -> &mut PayrollProcessor {
        &mut self.processor
    }
}
