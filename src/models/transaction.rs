//! Transaction model
//!
//! A transaction is a single recorded expense or income. Amounts are stored
//! as non-negative magnitudes; whether a transaction counts as income or
//! spending is decided by its category, not by the sign of the amount.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId, UserId};
use super::money::Money;

/// A recorded expense or income
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The user this transaction belongs to; every query is scoped to one owner
    pub owner_id: UserId,

    /// Free-text description
    pub description: String,

    /// Amount as a non-negative magnitude
    pub amount: Money,

    /// The category labeling this transaction
    pub category_id: CategoryId,

    /// Optional mood tag recorded alongside the amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,

    /// When the transaction occurred; decides which month window it belongs to
    pub occurred_at: DateTime<Utc>,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction occurring now
    pub fn new(
        owner_id: UserId,
        description: impl Into<String>,
        amount: Money,
        category_id: CategoryId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            owner_id,
            description: description.into(),
            amount,
            category_id,
            emotion: None,
            occurred_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transaction with an explicit occurrence time
    pub fn occurring_at(
        owner_id: UserId,
        description: impl Into<String>,
        amount: Money,
        category_id: CategoryId,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        let mut txn = Self::new(owner_id, description, amount, category_id);
        txn.occurred_at = occurred_at;
        txn
    }

    /// Attach a mood tag
    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }

    /// Move the transaction to a different category
    pub fn set_category(&mut self, category_id: CategoryId) {
        self.category_id = category_id;
        self.updated_at = Utc::now();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.occurred_at.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let owner = UserId::new();
        let category = CategoryId::new();
        let txn = Transaction::new(owner, "Coffee", Money::from_cents(250), category);

        assert_eq!(txn.owner_id, owner);
        assert_eq!(txn.category_id, category);
        assert_eq!(txn.amount.cents(), 250);
        assert!(txn.emotion.is_none());
    }

    #[test]
    fn test_occurring_at() {
        let when = chrono::DateTime::parse_from_rfc3339("2024-03-15T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let txn = Transaction::occurring_at(
            UserId::new(),
            "Groceries",
            Money::from_cents(4200),
            CategoryId::new(),
            when,
        );
        assert_eq!(txn.occurred_at, when);
    }

    #[test]
    fn test_validation() {
        let mut txn = Transaction::new(
            UserId::new(),
            "Dinner",
            Money::from_cents(2500),
            CategoryId::new(),
        );
        assert!(txn.validate().is_ok());

        txn.description = "   ".into();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );

        txn.description = "Dinner".into();
        txn.amount = Money::from_cents(-100);
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_with_emotion() {
        let txn = Transaction::new(
            UserId::new(),
            "Ice cream",
            Money::from_cents(500),
            CategoryId::new(),
        )
        .with_emotion("happy");
        assert_eq!(txn.emotion.as_deref(), Some("happy"));
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            UserId::new(),
            "Rent",
            Money::from_cents(95000),
            CategoryId::new(),
        );
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.amount, deserialized.amount);
        assert_eq!(txn.occurred_at, deserialized.occurred_at);
    }
}
