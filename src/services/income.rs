//! Income service
//!
//! Business logic for income mutations. Income never participates in budget
//! recomputation, so mutations only touch the income collection.

use crate::error::{TallyError, TallyResult};
use crate::models::{Income, IncomeId, IncomePatch};
use crate::storage::Storage;

/// Service for income management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new income record
    pub fn add(&self, income: Income) -> TallyResult<Income> {
        income
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.storage.income.upsert(income.clone())?;
        self.storage.income.save()?;

        Ok(income)
    }

    /// Merge a partial update into an income record
    ///
    /// Returns `Ok(None)` when the id doesn't match any record.
    pub fn update(&self, id: IncomeId, patch: IncomePatch) -> TallyResult<Option<Income>> {
        let Some(mut income) = self.storage.income.get(id)? else {
            return Ok(None);
        };

        income.apply(patch);
        income
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.storage.income.upsert(income.clone())?;
        self.storage.income.save()?;

        Ok(Some(income))
    }

    /// Delete an income record, returning whether it existed
    pub fn delete(&self, id: IncomeId) -> TallyResult<bool> {
        let removed = self.storage.income.delete(id)?;
        if removed {
            self.storage.income.save()?;
        }
        Ok(removed)
    }

    /// Get an income record by id
    pub fn get(&self, id: IncomeId) -> TallyResult<Option<Income>> {
        self.storage.income.get(id)
    }

    /// List all income records, newest first
    pub fn list(&self) -> TallyResult<Vec<Income>> {
        self.storage.income.get_all()
    }
}
