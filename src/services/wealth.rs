//! Wealth service
//!
//! Manages the per-user cash and savings figures shown on the dashboard.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, UserId, WealthRecord};
use crate::store::Store;

/// Service for wealth record management
pub struct WealthService<'a> {
    store: &'a Store,
}

impl<'a> WealthService<'a> {
    /// Create a new wealth service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Set both figures for an owner, creating the record on first use
    pub fn set(&self, owner: UserId, cash: Money, savings: Money) -> PocketbookResult<WealthRecord> {
        let mut record = self
            .store
            .wealth
            .get(owner)?
            .unwrap_or_else(|| WealthRecord::empty(owner));

        record.set(cash, savings);
        record
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        self.store.wealth.upsert(record.clone())?;
        self.store.wealth.save()?;

        Ok(record)
    }

    /// Get the record for an owner; a user with no figures yet gets zeros
    pub fn get(&self, owner: UserId) -> PocketbookResult<WealthRecord> {
        Ok(self
            .store
            .wealth
            .get(owner)?
            .unwrap_or_else(|| WealthRecord::empty(owner)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketbookPaths;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_missing_record_reads_as_zeros() {
        let (_temp_dir, store) = create_test_store();
        let service = WealthService::new(&store);

        let record = service.get(UserId::new()).unwrap();
        assert_eq!(record.total(), Money::zero());
    }

    #[test]
    fn test_set_and_get() {
        let (_temp_dir, store) = create_test_store();
        let owner = UserId::new();
        let service = WealthService::new(&store);

        service
            .set(owner, Money::from_cents(120000), Money::from_cents(500000))
            .unwrap();

        let record = service.get(owner).unwrap();
        assert_eq!(record.cash.cents(), 120000);
        assert_eq!(record.savings.cents(), 500000);
        assert_eq!(record.total().cents(), 620000);
    }

    #[test]
    fn test_negative_figures_rejected() {
        let (_temp_dir, store) = create_test_store();
        let service = WealthService::new(&store);

        let result = service.set(UserId::new(), Money::from_cents(-1), Money::zero());
        assert!(matches!(result, Err(PocketbookError::Validation(_))));
    }
}
