//! Expense service
//!
//! Business logic for expense mutations. Every mutation persists the expense
//! collection and then recomputes budget spent figures, so budgets always
//! reflect the latest expenses.

use chrono::Local;

use crate::error::{TallyError, TallyResult};
use crate::models::{Expense, ExpenseId, ExpensePatch};
use crate::storage::Storage;

use super::budget::BudgetService;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense
    pub fn add(&self, expense: Expense) -> TallyResult<Expense> {
        expense
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;
        self.recompute_budgets()?;

        Ok(expense)
    }

    /// Merge a partial update into an expense
    ///
    /// Returns `Ok(None)` when the id doesn't match any expense; an absent
    /// id is a no-op, not an error.
    pub fn update(&self, id: ExpenseId, patch: ExpensePatch) -> TallyResult<Option<Expense>> {
        let Some(mut expense) = self.storage.expenses.get(id)? else {
            return Ok(None);
        };

        expense.apply(patch);
        expense
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;
        self.recompute_budgets()?;

        Ok(Some(expense))
    }

    /// Delete an expense, returning whether it existed
    pub fn delete(&self, id: ExpenseId) -> TallyResult<bool> {
        let removed = self.storage.expenses.delete(id)?;
        if removed {
            self.storage.expenses.save()?;
            self.recompute_budgets()?;
        }
        Ok(removed)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> TallyResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// List all expenses, newest first
    pub fn list(&self) -> TallyResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// List expenses in one category, newest first
    pub fn list_by_category(&self, category: &str) -> TallyResult<Vec<Expense>> {
        self.storage.expenses.get_by_category(category)
    }

    fn recompute_budgets(&self) -> TallyResult<()> {
        let budget_service = BudgetService::new(self.storage);
        budget_service.recompute_spent(Local::now().date_naive())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use crate::models::{Money, PaymentMethodId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn sample(amount_cents: i64) -> Expense {
        Expense::new(
            "Lunch",
            Money::from_cents(amount_cents),
            "Food & Dining",
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            PaymentMethodId::new(),
        )
    }

    #[test]
    fn test_add_persists() {
        let (_tmp, storage) = setup();
        let service = ExpenseService::new(&storage);

        let expense = service.add(sample(1250)).unwrap();
        assert!(storage.paths().expenses_file().exists());
        assert_eq!(service.get(expense.id).unwrap().unwrap().amount.cents(), 1250);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let (_tmp, storage) = setup();
        let service = ExpenseService::new(&storage);

        let mut expense = sample(1000);
        expense.title = String::new();
        let err = service.add(expense).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.list().unwrap().len(), 0);
    }

    #[test]
    fn test_update_merges_partial() {
        let (_tmp, storage) = setup();
        let service = ExpenseService::new(&storage);

        let expense = service.add(sample(1000)).unwrap();
        let updated = service
            .update(
                expense.id,
                ExpensePatch {
                    amount: Some(Money::from_cents(1500)),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.amount.cents(), 1500);
        assert_eq!(updated.title, "Lunch");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let (_tmp, storage) = setup();
        let service = ExpenseService::new(&storage);

        let result = service
            .update(ExpenseId::new(), ExpensePatch::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_delete() {
        let (_tmp, storage) = setup();
        let service = ExpenseService::new(&storage);

        let expense = service.add(sample(1000)).unwrap();
        assert!(service.delete(expense.id).unwrap());
        assert!(!service.delete(expense.id).unwrap());
        assert!(service.list().unwrap().is_empty());
    }
}
