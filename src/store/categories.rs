//! Category repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{Category, CategoryId, CategoryRole};

/// Serializable category file contents
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    #[serde(default)]
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: CategoryData = super::file_io::read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = CategoryData { categories: list };
        super::file_io::write_json_atomic(&self.path, &file_data)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    /// Get a category by name (case-insensitive, trimmed)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let needle = name.trim().to_lowercase();
        Ok(categories
            .values()
            .find(|c| c.name.trim().to_lowercase() == needle)
            .cloned())
    }

    /// Get the first category with the given role, if any
    pub fn get_by_role(&self, role: CategoryRole) -> Result<Option<Category>, PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matching: Vec<_> = categories.values().filter(|c| c.role == role).collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching.first().map(|c| (*c).clone()))
    }

    /// Get all categories, sorted by name
    pub fn get_all(&self) -> Result<Vec<Category>, PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), PocketbookError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.insert(category.id, category);
        Ok(())
    }

    /// Delete a category
    pub fn delete(&self, id: CategoryId) -> Result<bool, PocketbookError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(categories.remove(&id).is_some())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}
