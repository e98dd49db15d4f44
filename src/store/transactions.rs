//! Transaction repository for JSON storage
//!
//! Every read is scoped to one owner; the window query keeps both bounds
//! inclusive to match the month-window semantics.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{MonthWindow, Transaction, TransactionId, UserId};

/// Serializable transaction file contents
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    transactions: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: TransactionData = super::file_io::read_json(&self.path)?;

        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        transactions.clear();
        for txn in file_data.transactions {
            transactions.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = transactions.values().cloned().collect();
        list.sort_by(|a, b| a.occurred_at.cmp(&b.occurred_at));

        let file_data = TransactionData { transactions: list };
        super::file_io::write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, PocketbookError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions.get(&id).cloned())
    }

    /// Get all transactions for an owner whose occurrence falls inside the
    /// window, newest first
    ///
    /// Both window bounds are inclusive.
    pub fn in_window(
        &self,
        window: &MonthWindow,
        owner: UserId,
    ) -> Result<Vec<Transaction>, PocketbookError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = transactions
            .values()
            .filter(|t| t.owner_id == owner && window.contains(t.occurred_at))
            .cloned()
            .collect();
        list.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(list)
    }

    /// Get the most recent transactions for an owner
    pub fn recent(&self, owner: UserId, limit: usize) -> Result<Vec<Transaction>, PocketbookError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = transactions
            .values()
            .filter(|t| t.owner_id == owner)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        list.truncate(limit);
        Ok(list)
    }

    /// Get all transactions for an owner
    pub fn all_for_owner(&self, owner: UserId) -> Result<Vec<Transaction>, PocketbookError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = transactions
            .values()
            .filter(|t| t.owner_id == owner)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(list)
    }

    /// Check if any transaction references a category
    pub fn any_in_category(
        &self,
        category_id: crate::models::CategoryId,
    ) -> Result<bool, PocketbookError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions.values().any(|t| t.category_id == category_id))
    }

    /// Insert or update a transaction
    pub fn upsert(&self, transaction: Transaction) -> Result<(), PocketbookError> {
        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        transactions.insert(transaction.id, transaction);
        Ok(())
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> Result<bool, PocketbookError> {
        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(transactions.remove(&id).is_some())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(transactions.len())
    }

    /// Get all transactions (export support)
    pub fn get_all(&self) -> Result<Vec<Transaction>, PocketbookError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = transactions.values().cloned().collect();
        list.sort_by(|a, b| a.occurred_at.cmp(&b.occurred_at));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, Month};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn txn_at(owner: UserId, cents: i64, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::occurring_at(
            owner,
            "test",
            Money::from_cents(cents),
            CategoryId::new(),
            Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_in_window_scopes_by_owner_and_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let ana = UserId::new();
        let bea = UserId::new();

        repo.upsert(txn_at(ana, 100, 2024, 3, 5)).unwrap();
        repo.upsert(txn_at(ana, 200, 2024, 3, 20)).unwrap();
        repo.upsert(txn_at(ana, 300, 2024, 2, 20)).unwrap(); // previous month
        repo.upsert(txn_at(bea, 400, 2024, 3, 10)).unwrap(); // other owner

        let window = Month::new(2024, 3).window();
        let result = repo.in_window(&window, ana).unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|t| t.owner_id == ana));
        // Newest first
        assert!(result[0].occurred_at > result[1].occurred_at);
    }

    #[test]
    fn test_in_window_includes_boundary_days() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let owner = UserId::new();
        let first = Transaction::occurring_at(
            owner,
            "first instant",
            Money::from_cents(1),
            CategoryId::new(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        );
        let last = Transaction::occurring_at(
            owner,
            "last instant",
            Money::from_cents(2),
            CategoryId::new(),
            Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap(),
        );
        repo.upsert(first).unwrap();
        repo.upsert(last).unwrap();

        let window = Month::new(2024, 3).window();
        assert_eq!(repo.in_window(&window, owner).unwrap().len(), 2);
    }

    #[test]
    fn test_recent_limits_and_orders() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let owner = UserId::new();
        for day in 1..=10 {
            repo.upsert(txn_at(owner, day as i64, 2024, 3, day)).unwrap();
        }

        let recent = repo.recent(owner, 3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].amount.cents(), 10);
        assert_eq!(recent[2].amount.cents(), 8);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let owner = UserId::new();
        let txn = txn_at(owner, 4200, 2024, 3, 15);
        let id = txn.id;
        repo.upsert(txn).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        let loaded = repo2.get(id).unwrap().unwrap();
        assert_eq!(loaded.amount.cents(), 4200);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = txn_at(UserId::new(), 100, 2024, 3, 1);
        let id = txn.id;
        repo.upsert(txn).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_any_in_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category = CategoryId::new();
        let mut txn = txn_at(UserId::new(), 100, 2024, 3, 1);
        txn.category_id = category;
        repo.upsert(txn).unwrap();

        assert!(repo.any_in_category(category).unwrap());
        assert!(!repo.any_in_category(CategoryId::new()).unwrap());
    }
}
