//! Storage initialization
//!
//! Seeds a fresh store with the default expense categories and the income
//! category.

use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::models::{Category, CategoryRole, DefaultCategory};

use super::Store;

/// Initialize storage with seed data
///
/// Idempotent: an already-populated category file is left alone.
pub fn initialize_store(paths: &PocketbookPaths) -> Result<(), PocketbookError> {
    paths.ensure_directories()?;

    let store = Store::new(paths.clone())?;
    store.load_all()?;

    if store.categories.count()? > 0 {
        return Ok(());
    }

    for default in DefaultCategory::all() {
        store.categories.upsert(default.to_category())?;
    }
    store
        .categories
        .upsert(Category::with_role("Income", CategoryRole::Income))?;
    store.categories.save()?;

    Ok(())
}
