//! Savings goal model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{GoalId, UserId};
use super::money::Money;

/// A savings goal with a target and the amount saved so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Unique identifier
    pub id: GoalId,

    /// The user this goal belongs to
    pub owner_id: UserId,

    /// Goal name
    pub name: String,

    /// Target amount to save
    pub target_amount: Money,

    /// Amount saved so far
    pub current_amount: Money,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When the goal was last modified
    pub updated_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Create a new goal with nothing saved yet
    pub fn new(owner_id: UserId, name: impl Into<String>, target_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            owner_id,
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a contribution toward the goal
    pub fn contribute(&mut self, amount: Money) {
        self.current_amount += amount;
        self.updated_at = Utc::now();
    }

    /// Check if the goal has been reached
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Amount still missing (zero once complete)
    pub fn remaining(&self) -> Money {
        (self.target_amount - self.current_amount).surplus_or_zero()
    }

    /// Progress as a percentage, capped at 100
    pub fn progress_percent(&self) -> u8 {
        if self.target_amount.is_zero() || self.is_complete() {
            return 100;
        }
        let pct = (self.current_amount.cents() * 100) / self.target_amount.cents();
        pct.clamp(0, 100) as u8
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }

        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive (got {})", amount)
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Saved amount cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
