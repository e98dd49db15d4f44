//! Wealth repository for JSON storage
//!
//! Keyed by owner: at most one record per user.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{UserId, WealthRecord};

/// Serializable wealth file contents
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct WealthData {
    #[serde(default)]
    records: Vec<WealthRecord>,
}

/// Repository for wealth record persistence
pub struct WealthRepository {
    path: PathBuf,
    records: RwLock<HashMap<UserId, WealthRecord>>,
}

impl WealthRepository {
    /// Create a new wealth repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: WealthData = super::file_io::read_json(&self.path)?;

        let mut records = self
            .records
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.clear();
        for record in file_data.records {
            records.insert(record.owner_id, record);
        }

        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = records.values().cloned().collect();
        list.sort_by(|a, b| a.owner_id.as_uuid().cmp(b.owner_id.as_uuid()));

        let file_data = WealthData { records: list };
        super::file_io::write_json_atomic(&self.path, &file_data)
    }

    /// Get the record for an owner, if any
    pub fn get(&self, owner: UserId) -> Result<Option<WealthRecord>, PocketbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.get(&owner).cloned())
    }

    /// Insert or replace the record for its owner
    pub fn upsert(&self, record: WealthRecord) -> Result<(), PocketbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.insert(record.owner_id, record);
        Ok(())
    }

    /// Delete the record for an owner
    pub fn delete(&self, owner: UserId) -> Result<bool, PocketbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(records.remove(&owner).is_some())
    }

    /// Get all records (export support)
    pub fn get_all(&self) -> Result<Vec<WealthRecord>, PocketbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, WealthRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wealth.json");
        let repo = WealthRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_one_record_per_owner() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let owner = UserId::new();
        repo.upsert(WealthRecord::new(
            owner,
            Money::from_cents(100),
            Money::from_cents(200),
        ))
        .unwrap();
        repo.upsert(WealthRecord::new(
            owner,
            Money::from_cents(300),
            Money::from_cents(400),
        ))
        .unwrap();

        let record = repo.get(owner).unwrap().unwrap();
        assert_eq!(record.cash.cents(), 300);
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let owner = UserId::new();
        repo.upsert(WealthRecord::new(
            owner,
            Money::from_cents(120000),
            Money::from_cents(500000),
        ))
        .unwrap();
        repo.save().unwrap();

        let repo2 = WealthRepository::new(temp_dir.path().join("wealth.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(owner).unwrap().unwrap().total().cents(), 620000);
    }
}
