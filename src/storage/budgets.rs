//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json. Budgets are keyed by
//! id but also looked up by category name, which is unique per budget.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Budget, BudgetId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<HashMap<BudgetId, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for budget in file_data.budgets {
            data.insert(budget.id, budget);
        }

        Ok(())
    }

    /// Save budgets to disk, sorted by category name
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| a.category.cmp(&b.category));

        let file_data = BudgetData { budgets };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get the budget covering a category, if any
    pub fn get_by_category(&self, category: &str) -> Result<Option<Budget>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().find(|b| b.category == category).cloned())
    }

    /// Get all budgets, sorted by category name
    pub fn get_all(&self) -> Result<Vec<Budget>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(budgets)
    }

    /// Insert or update a budget
    pub fn upsert(&self, budget: Budget) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(budget.id, budget);
        Ok(())
    }

    /// Delete a budget, returning whether it existed
    pub fn delete(&self, id: BudgetId) -> Result<bool, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Number of stored budgets
    pub fn count(&self) -> Result<usize, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, Money};
    use tempfile::TempDir;

    #[test]
    fn test_upsert_and_lookup_by_category() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));

        let budget = Budget::new("Food & Dining", Money::from_cents(50000), BudgetPeriod::Monthly);
        repo.upsert(budget).unwrap();

        let found = repo.get_by_category("Food & Dining").unwrap().unwrap();
        assert_eq!(found.limit.cents(), 50000);
        assert!(repo.get_by_category("Travel").unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");

        let repo = BudgetRepository::new(path.clone());
        repo.upsert(Budget::new("Shopping", Money::from_cents(20000), BudgetPeriod::Monthly))
            .unwrap();
        repo.upsert(Budget::new("Food & Dining", Money::from_cents(50000), BudgetPeriod::Weekly))
            .unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 2);

        // Sorted by category on listing
        let all = repo2.get_all().unwrap();
        assert_eq!(all[0].category, "Food & Dining");
        assert_eq!(all[1].category, "Shopping");
    }
}
