//! Snapshot storage for Finsight
//!
//! The finance API owns all data. Its JSON responses are kept as one file per
//! entity under the data directory, and the whole snapshot is loaded into
//! memory before any filtering or aggregation runs.

pub mod file_io;
pub mod init;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use crate::config::paths::FinsightPaths;
use crate::error::FinsightError;
use crate::models::{Account, Budget, Category, FinancialGoal, Transaction};

/// In-memory copy of every snapshot file
pub struct Storage {
    paths: FinsightPaths,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<FinancialGoal>,
}

impl Storage {
    /// Create an empty storage bound to `paths`
    pub fn new(paths: FinsightPaths) -> Self {
        Self {
            paths,
            accounts: Vec::new(),
            categories: Vec::new(),
            transactions: Vec::new(),
            budgets: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Create a storage and load every snapshot file
    pub fn open(paths: FinsightPaths) -> Result<Self, FinsightError> {
        let mut storage = Self::new(paths);
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &FinsightPaths {
        &self.paths
    }

    /// Load all data from disk; missing files load as empty lists
    pub fn load_all(&mut self) -> Result<(), FinsightError> {
        self.accounts = read_json(self.paths.accounts_file())?;
        self.categories = read_json(self.paths.categories_file())?;
        self.transactions = read_json(self.paths.transactions_file())?;
        self.budgets = read_json(self.paths.budgets_file())?;
        self.goals = read_json(self.paths.goals_file())?;

        tracing::info!(
            accounts = self.accounts.len(),
            categories = self.categories.len(),
            transactions = self.transactions.len(),
            budgets = self.budgets.len(),
            goals = self.goals.len(),
            data_dir = %self.paths.data_dir().display(),
            "loaded snapshot"
        );

        Ok(())
    }
}
