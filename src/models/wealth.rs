//! Wealth record model
//!
//! One record per user, holding the cash and savings figures shown on the
//! dashboard. Total wealth is derived, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use super::money::Money;

/// A user's declared cash and savings figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthRecord {
    /// The user this record belongs to (one record per user)
    pub owner_id: UserId,

    /// Cash on hand
    pub cash: Money,

    /// Money in savings
    pub savings: Money,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl WealthRecord {
    /// Create a new record
    pub fn new(owner_id: UserId, cash: Money, savings: Money) -> Self {
        Self {
            owner_id,
            cash,
            savings,
            updated_at: Utc::now(),
        }
    }

    /// An all-zero record for a user with no figures yet
    pub fn empty(owner_id: UserId) -> Self {
        Self::new(owner_id, Money::zero(), Money::zero())
    }

    /// Cash plus savings
    pub fn total(&self) -> Money {
        self.cash + self.savings
    }

    /// Replace both figures
    pub fn set(&mut self, cash: Money, savings: Money) {
        self.cash = cash;
        self.savings = savings;
        self.updated_at = Utc::now();
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), WealthValidationError> {
        if self.cash.is_negative() {
            return Err(WealthValidationError::NegativeCash(self.cash));
        }
        if self.savings.is_negative() {
            return Err(WealthValidationError::NegativeSavings(self.savings));
        }
        Ok(())
    }
}

/// Validation errors for wealth records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WealthValidationError {
    NegativeCash(Money),
    NegativeSavings(Money),
}

impl fmt::Display for WealthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCash(amount) => write!(f, "Cash cannot be negative (got {})", amount),
            Self::NegativeSavings(amount) => {
                write!(f, "Savings cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for WealthValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let record = WealthRecord::new(
            UserId::new(),
            Money::from_cents(120000),
            Money::from_cents(500000),
        );
        assert_eq!(record.total().cents(), 620000);
    }

    #[test]
    fn test_empty() {
        let record = WealthRecord::empty(UserId::new());
        assert_eq!(record.total(), Money::zero());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut record = WealthRecord::empty(UserId::new());
        record.cash = Money::from_cents(-1);
        assert!(matches!(
            record.validate(),
            Err(WealthValidationError::NegativeCash(_))
        ));
    }
}
