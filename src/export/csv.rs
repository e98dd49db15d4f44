//! CSV export
//!
//! Spreadsheet-friendly transaction export: one row per transaction with the
//! category name resolved.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::store::Store;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write + ?Sized>(
    store: &Store,
    writer: &mut W,
) -> PocketbookResult<()> {
    let categories = store.categories.get_all()?;
    let category_names: HashMap<_, _> = categories
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "ID",
            "Date",
            "Description",
            "Category",
            "Amount",
            "Emotion",
            "Owner",
        ])
        .map_err(|e| PocketbookError::Export(e.to_string()))?;

    for txn in store.transactions.get_all()? {
        let category_name = category_names
            .get(&txn.category_id)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());

        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.occurred_at.format("%Y-%m-%d").to_string(),
                txn.description.clone(),
                category_name,
                txn.amount.to_string(),
                txn.emotion.clone().unwrap_or_default(),
                txn.owner_id.to_string(),
            ])
            .map_err(|e| PocketbookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketbookPaths;
    use crate::models::{Category, Money, Transaction, UserId};
    use tempfile::TempDir;

    #[test]
    fn test_export_contains_header_and_rows() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();

        let category = Category::new("Groceries");
        let category_id = category.id;
        store.categories.upsert(category).unwrap();
        store
            .transactions
            .upsert(Transaction::new(
                UserId::new(),
                "Milk, organic",
                Money::from_cents(250),
                category_id,
            ))
            .unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&store, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("ID,Date,Description,Category,Amount,Emotion,Owner"));
        assert!(output.contains("Groceries"));
        // Comma in the description gets quoted, not split
        assert!(output.contains("\"Milk, organic\""));
        assert!(output.contains("2.50"));
    }
}
