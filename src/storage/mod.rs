//! Storage layer for Tally
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each collection lives in its own file under the data directory.

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod income;
pub mod init;
pub mod payments;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use income::IncomeRepository;
pub use init::initialize_storage;
pub use payments::PaymentMethodRepository;

use crate::config::paths::TallyPaths;
use crate::error::TallyError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TallyPaths,
    pub expenses: ExpenseRepository,
    pub income: IncomeRepository,
    pub budgets: BudgetRepository,
    pub categories: CategoryRepository,
    pub payment_methods: PaymentMethodRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            income: IncomeRepository::new(paths.income_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            payment_methods: PaymentMethodRepository::new(paths.payment_methods_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TallyError> {
        self.expenses.load()?;
        self.income.load()?;
        self.budgets.load()?;
        self.categories.load()?;
        self.payment_methods.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TallyError> {
        self.expenses.save()?;
        self.income.save()?;
        self.budgets.save()?;
        self.categories.save()?;
        self.payment_methods.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_on_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        // No files yet; every repository defaults to empty
        storage.load_all().unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert_eq!(storage.budgets.count().unwrap(), 0);
    }
}
