//! Income repository for JSON storage
//!
//! Manages loading and saving income records to income.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Income, IncomeId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable income data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    income: Vec<Income>,
}

/// Repository for income persistence
pub struct IncomeRepository {
    path: PathBuf,
    data: RwLock<HashMap<IncomeId, Income>>,
}

impl IncomeRepository {
    /// Create a new income repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load income records from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for income in file_data.income {
            data.insert(income.id, income);
        }

        Ok(())
    }

    /// Save income records to disk, newest first
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut income: Vec<_> = data.values().cloned().collect();
        income.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = IncomeData { income };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an income record by ID
    pub fn get(&self, id: IncomeId) -> Result<Option<Income>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all income records, newest first
    pub fn get_all(&self) -> Result<Vec<Income>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut income: Vec<_> = data.values().cloned().collect();
        income.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(income)
    }

    /// Insert or update an income record
    pub fn upsert(&self, income: Income) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(income.id, income);
        Ok(())
    }

    /// Delete an income record, returning whether it existed
    pub fn delete(&self, id: IncomeId) -> Result<bool, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Number of stored income records
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
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample(title: &str, day: u32) -> Income {
        Income::new(
            title,
            Money::from_cents(100000),
            "Salary",
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        )
    }

    #[test]
    fn test_upsert_get_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.json"));

        let income = sample("Paycheck", 1);
        let id = income.id;
        repo.upsert(income).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().title, "Paycheck");
        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("income.json");

        let repo = IncomeRepository::new(path.clone());
        repo.upsert(sample("Paycheck", 1)).unwrap();
        repo.upsert(sample("Bonus", 15)).unwrap();
        repo.save().unwrap();

        let repo2 = IncomeRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 2);

        let all = repo2.get_all().unwrap();
        assert_eq!(all[0].title, "Bonus");
    }
}
