//! Category service
//!
//! Provides business logic for category management, including resolution of
//! the income category.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Category, CategoryId, CategoryRole};
use crate::store::Store;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a Store,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new category
    pub fn create(&self, name: &str, role: CategoryRole) -> PocketbookResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PocketbookError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        // Check for duplicate name
        if self.store.categories.get_by_name(name)?.is_some() {
            return Err(PocketbookError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        // A second income category would make income resolution ambiguous
        if role == CategoryRole::Income
            && self
                .store
                .categories
                .get_by_role(CategoryRole::Income)?
                .is_some()
        {
            return Err(PocketbookError::Duplicate {
                entity_type: "Income category",
                identifier: name.to_string(),
            });
        }

        let category = Category::with_role(name, role);
        category
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        self.store.categories.upsert(category.clone())?;
        self.store.categories.save()?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> PocketbookResult<Option<Category>> {
        self.store.categories.get(id)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> PocketbookResult<Option<Category>> {
        // Try by name first
        if let Some(category) = self.store.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.store.categories.get(id);
        }

        Ok(None)
    }

    /// List all categories
    pub fn list(&self) -> PocketbookResult<Vec<Category>> {
        self.store.categories.get_all()
    }

    /// Rename a category
    pub fn rename(&self, id: CategoryId, name: &str) -> PocketbookResult<Category> {
        let mut category = self
            .store
            .categories
            .get(id)?
            .ok_or_else(|| PocketbookError::category_not_found(id.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(PocketbookError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if let Some(existing) = self.store.categories.get_by_name(name)? {
            if existing.id != id {
                return Err(PocketbookError::Duplicate {
                    entity_type: "Category",
                    identifier: name.to_string(),
                });
            }
        }

        category.rename(name);
        category
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        self.store.categories.upsert(category.clone())?;
        self.store.categories.save()?;

        Ok(category)
    }

    /// Delete a category
    ///
    /// Refuses to delete a category that still has transactions.
    pub fn delete(&self, id: CategoryId) -> PocketbookResult<()> {
        let category = self
            .store
            .categories
            .get(id)?
            .ok_or_else(|| PocketbookError::category_not_found(id.to_string()))?;

        if self.store.transactions.any_in_category(id)? {
            return Err(PocketbookError::Validation(format!(
                "Category '{}' still has transactions",
                category.name
            )));
        }

        self.store.categories.delete(id)?;
        self.store.categories.save()?;

        Ok(())
    }

    /// Resolve the income category, if one exists
    ///
    /// Looks for the `Income` role first; stores created before roles
    /// existed fall back to the normalized-name convention ("income",
    /// case-insensitive, trimmed). Returns `None` when neither matches —
    /// callers then treat every transaction as an expense.
    pub fn income_category(&self) -> PocketbookResult<Option<Category>> {
        if let Some(category) = self.store.categories.get_by_role(CategoryRole::Income)? {
            return Ok(Some(category));
        }

        let categories = self.store.categories.get_all()?;
        Ok(categories.into_iter().find(|c| c.has_income_name()))
    }

    /// Resolve the income category, creating it on first use
    pub fn ensure_income_category(&self) -> PocketbookResult<Category> {
        if let Some(category) = self.income_category()? {
            return Ok(category);
        }

        let category = Category::with_role("Income", CategoryRole::Income);
        self.store.categories.upsert(category.clone())?;
        self.store.categories.save()?;

        Ok(category)
    }

    /// First expense-role category, used as the default for parsed expenses
    pub fn default_expense_category(&self) -> PocketbookResult<Option<Category>> {
        self.store.categories.get_by_role(CategoryRole::Expense)
    }
}
