//! Budget repository for JSON storage
//!
//! The overlap query takes an optional owner: `None` returns budgets from
//! every user (the shared scope), `Some(owner)` restricts to one user.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{Budget, BudgetId, MonthWindow, UserId};

/// Serializable budget file contents
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<HashMap<BudgetId, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: BudgetData = super::file_io::read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for budget in file_data.budgets {
            budgets.insert(budget.id, budget);
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by(|a, b| a.start_date.cmp(&b.start_date));

        let file_data = BudgetData { budgets: list };
        super::file_io::write_json_atomic(&self.path, &file_data)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, PocketbookError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(&id).cloned())
    }

    /// Get all budgets whose interval overlaps the window
    ///
    /// `owner` of `None` returns budgets from every user.
    pub fn overlapping(
        &self,
        window: &MonthWindow,
        owner: Option<UserId>,
    ) -> Result<Vec<Budget>, PocketbookError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets
            .values()
            .filter(|b| b.overlaps(window))
            .filter(|b| owner.map_or(true, |o| b.owner_id == o))
            .cloned()
            .collect();
        list.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(list)
    }

    /// Insert or update a budget
    pub fn upsert(&self, budget: Budget) -> Result<(), PocketbookError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.insert(budget.id, budget);
        Ok(())
    }

    /// Delete a budget
    pub fn delete(&self, id: BudgetId) -> Result<bool, PocketbookError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.remove(&id).is_some())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }

    /// Get all budgets (export support)
    pub fn get_all(&self) -> Result<Vec<Budget>, PocketbookError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(list)
    }
}
