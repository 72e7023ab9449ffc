//! Category repository for JSON storage
//!
//! Categories are reference data: seeded once at init, read-only afterwards.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

/// Repository for category reference data
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for category in file_data.categories {
            data.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk, sorted by name
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = CategoryData { categories };
        write_json_atomic(&self.path, &file_data)
    }

    /// Replace the stored set with the given categories (used by init)
    pub fn replace_all(&self, categories: Vec<Category>) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for category in categories {
            data.insert(category.id, category);
        }
        Ok(())
    }

    /// Get a category by name
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().find(|c| c.name == name).cloned())
    }

    /// Get all categories, sorted by name
    pub fn get_all(&self) -> Result<Vec<Category>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Number of stored categories
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
        let path = temp_dir.path().join("categories.json");

        let repo = CategoryRepository::new(path.clone());
        repo.replace_all(Category::defaults()).unwrap();
        repo.save().unwrap();

        let repo2 = CategoryRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 6);

        let food = repo2.get_by_name("Food & Dining").unwrap().unwrap();
        assert_eq!(food.icon, "🍽️");
    }

    #[test]
    fn test_get_by_name_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        assert!(repo.get_by_name("Nonexistent").unwrap().is_none());
    }
}
