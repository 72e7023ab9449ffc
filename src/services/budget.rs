//! Budget service
//!
//! Business logic for budgets: creation, listing, and the spent
//! recomputation that runs after every expense change.
//!
//! `spent` is a derived figure. It is recomputed from matching expenses and
//! never mutated directly; recomputation with unchanged inputs writes
//! nothing and yields identical values.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::{Budget, BudgetId, Money};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new budget
    ///
    /// The spent figure starts at zero and is recomputed immediately, so a
    /// budget created after its matching expenses is correct from the start.
    pub fn add(&self, budget: Budget, today: NaiveDate) -> TallyResult<Budget> {
        budget
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        if self
            .storage
            .budgets
            .get_by_category(&budget.category)?
            .is_some()
        {
            return Err(TallyError::duplicate_budget(budget.category));
        }

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;
        self.recompute_spent(today)?;

        // Re-read so the caller sees the recomputed spent figure
        self.storage
            .budgets
            .get(budget.id)?
            .ok_or_else(|| TallyError::budget_not_found(budget.id.to_string()))
    }

    /// Delete a budget, returning whether it existed
    pub fn delete(&self, id: BudgetId) -> TallyResult<bool> {
        let removed = self.storage.budgets.delete(id)?;
        if removed {
            self.storage.budgets.save()?;
        }
        Ok(removed)
    }

    /// Delete the budget for a category, returning whether one existed
    pub fn delete_by_category(&self, category: &str) -> TallyResult<bool> {
        match self.storage.budgets.get_by_category(category)? {
            Some(budget) => self.delete(budget.id),
            None => Ok(false),
        }
    }

    /// Get a budget by id
    pub fn get(&self, id: BudgetId) -> TallyResult<Option<Budget>> {
        self.storage.budgets.get(id)
    }

    /// List all budgets, sorted by category
    pub fn list(&self) -> TallyResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Recompute every budget's spent figure from the expense collection
    ///
    /// For each budget, spent = sum of amounts of expenses whose category
    /// matches and whose date falls inside the budget's period window
    /// relative to `today`. Budgets are persisted only when some spent value
    /// actually changed, so a repeated recomputation is a no-op.
    ///
    /// Returns whether anything changed.
    pub fn recompute_spent(&self, today: NaiveDate) -> TallyResult<bool> {
        let budgets = self.storage.budgets.get_all()?;
        if budgets.is_empty() {
            return Ok(false);
        }

        let mut changed = false;
        for mut budget in budgets {
            let expenses = self.storage.expenses.get_by_category(&budget.category)?;
            let spent: Money = expenses
                .iter()
                .filter(|e| budget.period.contains(e.date, today))
                .map(|e| e.amount)
                .sum();

            if spent != budget.spent {
                budget.spent = spent;
                self.storage.budgets.upsert(budget)?;
                changed = true;
            }
        }

        if changed {
            self.storage.budgets.save()?;
        }

        Ok(changed)
    }
}
