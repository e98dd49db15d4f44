//! Transaction service
//!
//! Provides business logic for recording and listing transactions. Every
//! entry point takes the owner explicitly; there is no ambient notion of a
//! current user at this layer.

use chrono::{DateTime, Utc};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{CategoryId, Money, Month, Transaction, TransactionId, UserId};
use crate::services::assist::{ParsedTransaction, TransactionKind};
use crate::services::CategoryService;
use crate::store::Store;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a Store,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Record a transaction
    pub fn record(
        &self,
        owner: UserId,
        description: &str,
        amount: Money,
        category_id: CategoryId,
        occurred_at: Option<DateTime<Utc>>,
        emotion: Option<String>,
    ) -> PocketbookResult<Transaction> {
        // Verify category exists
        if self.store.categories.get(category_id)?.is_none() {
            return Err(PocketbookError::category_not_found(category_id.to_string()));
        }

        let mut txn = match occurred_at {
            Some(when) => {
                Transaction::occurring_at(owner, description.trim(), amount, category_id, when)
            }
            None => Transaction::new(owner, description.trim(), amount, category_id),
        };
        if let Some(emotion) = emotion {
            txn = txn.with_emotion(emotion);
        }

        txn.validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        self.store.transactions.upsert(txn.clone())?;
        self.store.transactions.save()?;

        Ok(txn)
    }

    /// Record a transaction produced by the text classifier
    ///
    /// Income goes to the income category (created on first use); expenses go
    /// to the default expense category.
    pub fn record_parsed(
        &self,
        owner: UserId,
        parsed: ParsedTransaction,
    ) -> PocketbookResult<Transaction> {
        let categories = CategoryService::new(self.store);

        let category_id = match parsed.kind {
            TransactionKind::Income => categories.ensure_income_category()?.id,
            TransactionKind::Expense => categories
                .default_expense_category()?
                .ok_or_else(|| {
                    PocketbookError::Validation(
                        "No expense category exists to receive the transaction".into(),
                    )
                })?
                .id,
        };

        self.record(
            owner,
            &parsed.description,
            parsed.amount,
            category_id,
            None,
            None,
        )
    }

    /// All transactions for an owner in a month, newest first
    pub fn list_month(&self, owner: UserId, month: Month) -> PocketbookResult<Vec<Transaction>> {
        self.store.transactions.in_window(&month.window(), owner)
    }

    /// Most recent transactions for an owner
    pub fn recent(&self, owner: UserId, limit: usize) -> PocketbookResult<Vec<Transaction>> {
        self.store.transactions.recent(owner, limit)
    }

    /// All transactions for an owner, newest first
    pub fn list_all(&self, owner: UserId) -> PocketbookResult<Vec<Transaction>> {
        self.store.transactions.all_for_owner(owner)
    }

    /// Delete a transaction, verifying ownership
    pub fn delete(&self, owner: UserId, id: TransactionId) -> PocketbookResult<()> {
        let txn = self
            .store
            .transactions
            .get(id)?
            .ok_or_else(|| PocketbookError::transaction_not_found(id.to_string()))?;

        if txn.owner_id != owner {
            return Err(PocketbookError::transaction_not_found(id.to_string()));
        }

        self.store.transactions.delete(id)?;
        self.store.transactions.save()?;

        Ok(())
    }
}
