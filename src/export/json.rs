//! Full-database JSON export

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Budget, Category, SavingsGoal, Transaction, User, WealthRecord};
use crate::store::Store;

/// Export schema version, bumped on breaking changes
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Everything in the store, in one serializable document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<SavingsGoal>,
    pub wealth: Vec<WealthRecord>,
}

impl FullExport {
    /// Snapshot the whole store
    pub fn gather(store: &Store) -> PocketbookResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            users: store.users.get_all()?,
            categories: store.categories.get_all()?,
            transactions: store.transactions.get_all()?,
            budgets: store.budgets.get_all()?,
            goals: store.goals.get_all()?,
            wealth: store.wealth.get_all()?,
        })
    }
}

/// Write a full JSON export to the writer
pub fn export_full_json<W: Write + ?Sized>(store: &Store, writer: &mut W) -> PocketbookResult<()> {
    let export = FullExport::gather(store)?;
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| PocketbookError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketbookPaths;
    use crate::models::{Money, UserId};
    use tempfile::TempDir;

    #[test]
    fn test_export_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();

        store.categories.upsert(Category::new("Groceries")).unwrap();
        store
            .goals
            .upsert(SavingsGoal::new(
                UserId::new(),
                "Vacation",
                Money::from_cents(1000),
            ))
            .unwrap();

        let mut buffer = Vec::new();
        export_full_json(&store, &mut buffer).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.categories.len(), 1);
        assert_eq!(parsed.goals.len(), 1);
    }
}
