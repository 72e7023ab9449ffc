//! Payment method repository for JSON storage
//!
//! Payment methods are reference data: seeded once at init, looked up by id
//! or name afterwards.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{PaymentMethod, PaymentMethodId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable payment method data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PaymentMethodData {
    payment_methods: Vec<PaymentMethod>,
}

/// Repository for payment method reference data
pub struct PaymentMethodRepository {
    path: PathBuf,
    data: RwLock<HashMap<PaymentMethodId, PaymentMethod>>,
}

impl PaymentMethodRepository {
    /// Create a new payment method repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load payment methods from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: PaymentMethodData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for method in file_data.payment_methods {
            data.insert(method.id, method);
        }

        Ok(())
    }

    /// Save payment methods to disk, sorted by name
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut payment_methods: Vec<_> = data.values().cloned().collect();
        payment_methods.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = PaymentMethodData { payment_methods };
        write_json_atomic(&self.path, &file_data)
    }

    /// Replace the stored set with the given methods (used by init)
    pub fn replace_all(&self, methods: Vec<PaymentMethod>) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for method in methods {
            data.insert(method.id, method);
        }
        Ok(())
    }

    /// Get a payment method by ID
    pub fn get(&self, id: PaymentMethodId) -> Result<Option<PaymentMethod>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get a payment method by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<PaymentMethod>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Get all payment methods, sorted by name
    pub fn get_all(&self) -> Result<Vec<PaymentMethod>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut payment_methods: Vec<_> = data.values().cloned().collect();
        payment_methods.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(payment_methods)
    }

    /// Number of stored payment methods
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
    use tempfile::TempDir;

    #[test]
    fn test_replace_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payment_methods.json");

        let repo = PaymentMethodRepository::new(path.clone());
        repo.replace_all(PaymentMethod::defaults()).unwrap();
        repo.save().unwrap();

        let repo2 = PaymentMethodRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 4);
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let repo = PaymentMethodRepository::new(temp_dir.path().join("pm.json"));
        repo.replace_all(PaymentMethod::defaults()).unwrap();

        assert!(repo.get_by_name("cash").unwrap().is_some());
        assert!(repo.get_by_name("CREDIT CARD").unwrap().is_some());
        assert!(repo.get_by_name("cheque").unwrap().is_none());
    }
}
