//! Budget service
//!
//! Provides business logic for declaring and listing date-ranged budgets.

use chrono::NaiveDate;

use crate::config::settings::BudgetScope;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Budget, BudgetId, CategoryId, Money, Month, UserId};
use crate::store::Store;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a Store,
    scope: BudgetScope,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a Store, scope: BudgetScope) -> Self {
        Self { store, scope }
    }

    /// Declare a new budget
    pub fn create(
        &self,
        owner: UserId,
        amount: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
        category_id: Option<CategoryId>,
    ) -> PocketbookResult<Budget> {
        if let Some(category_id) = category_id {
            if self.store.categories.get(category_id)?.is_none() {
                return Err(PocketbookError::category_not_found(category_id.to_string()));
            }
        }

        let mut budget = Budget::new(owner, amount, start_date, end_date);
        budget.category_id = category_id;

        budget
            .validate()
            .map_err(|e| PocketbookError::Budget(e.to_string()))?;

        self.store.budgets.upsert(budget.clone())?;
        self.store.budgets.save()?;

        Ok(budget)
    }

    /// Update a budget's amount and/or interval
    pub fn update(
        &self,
        owner: UserId,
        id: BudgetId,
        amount: Option<Money>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> PocketbookResult<Budget> {
        let mut budget = self.owned_budget(owner, id)?;

        if let Some(amount) = amount {
            budget.amount = amount;
        }
        if let Some(start_date) = start_date {
            budget.start_date = start_date;
        }
        if let Some(end_date) = end_date {
            budget.end_date = end_date;
        }
        budget.updated_at = chrono::Utc::now();

        budget
            .validate()
            .map_err(|e| PocketbookError::Budget(e.to_string()))?;

        self.store.budgets.upsert(budget.clone())?;
        self.store.budgets.save()?;

        Ok(budget)
    }

    /// Delete a budget
    pub fn delete(&self, owner: UserId, id: BudgetId) -> PocketbookResult<()> {
        self.owned_budget(owner, id)?;
        self.store.budgets.delete(id)?;
        self.store.budgets.save()?;
        Ok(())
    }

    /// All budgets belonging to a month, honoring the configured scope
    pub fn list_month(&self, owner: UserId, month: Month) -> PocketbookResult<Vec<Budget>> {
        let scope_owner = match self.scope {
            BudgetScope::Shared => None,
            BudgetScope::PerOwner => Some(owner),
        };
        self.store.budgets.overlapping(&month.window(), scope_owner)
    }

    /// Declared budget total for a month
    pub fn month_total(&self, owner: UserId, month: Month) -> PocketbookResult<Money> {
        Ok(self.list_month(owner, month)?.iter().map(|b| b.amount).sum())
    }

    fn owned_budget(&self, owner: UserId, id: BudgetId) -> PocketbookResult<Budget> {
        let budget = self
            .store
            .budgets
            .get(id)?
            .ok_or_else(|| PocketbookError::budget_not_found(id.to_string()))?;

        // Mutation always requires ownership, whatever the read scope is
        if budget.owner_id != owner {
            return Err(PocketbookError::budget_not_found(id.to_string()));
        }

        Ok(budget)
    }
}
