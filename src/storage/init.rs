//! Storage initialization
//!
//! Creates empty ledger files and seeds the default reference data
//! (categories and payment methods) on first run. Files that already exist
//! are left untouched.

use crate::config::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::{Category, PaymentMethod};

use super::budgets::BudgetRepository;
use super::categories::CategoryRepository;
use super::expenses::ExpenseRepository;
use super::income::IncomeRepository;
use super::payments::PaymentMethodRepository;

/// Initialize storage: create directories, empty ledger files, and seed
/// reference data
pub fn initialize_storage(paths: &TallyPaths) -> Result<(), TallyError> {
    paths.ensure_directories()?;

    if !paths.expenses_file().exists() {
        ExpenseRepository::new(paths.expenses_file()).save()?;
    }

    if !paths.income_file().exists() {
        IncomeRepository::new(paths.income_file()).save()?;
    }

    if !paths.budgets_file().exists() {
        BudgetRepository::new(paths.budgets_file()).save()?;
    }

    if !paths.categories_file().exists() {
        let repo = CategoryRepository::new(paths.categories_file());
        repo.replace_all(Category::defaults())?;
        repo.save()?;
    }

    if !paths.payment_methods_file().exists() {
        let repo = PaymentMethodRepository::new(paths.payment_methods_file());
        repo.replace_all(PaymentMethod::defaults())?;
        repo.save()?;
    }

    Ok(())
}

/// Wipe every data file, then reinitialize from the defaults
pub fn reset_storage(paths: &TallyPaths) -> Result<(), TallyError> {
    for file in [
        paths.expenses_file(),
        paths.income_file(),
        paths.budgets_file(),
        paths.categories_file(),
        paths.payment_methods_file(),
    ] {
        if file.exists() {
            std::fs::remove_file(&file)?;
        }
    }

    initialize_storage(paths)
}
