//! Budget model
//!
//! A budget declares a spendable amount over a closed date interval
//! `[start_date, end_date]`. A budget belongs to a calendar month when its
//! interval overlaps that month's window.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId, UserId};
use super::money::Money;
use super::month::MonthWindow;

/// A declared spendable amount over a date interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The user who declared this budget
    pub owner_id: UserId,

    /// Optional category restriction; the dashboard aggregates across all
    /// categories, so this is informational for now
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// The budgeted amount (positive)
    pub amount: Money,

    /// First day the budget applies to (inclusive)
    pub start_date: NaiveDate,

    /// Last day the budget applies to (inclusive)
    pub end_date: NaiveDate,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(owner_id: UserId, amount: Money, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            owner_id,
            category_id: None,
            amount,
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restrict the budget to a category
    pub fn for_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Check if the budget's interval overlaps a month window
    ///
    /// Overlap means `end_date >= window start AND start_date <= window end`,
    /// so a budget spanning several months belongs to each of them.
    pub fn overlaps(&self, window: &MonthWindow) -> bool {
        self.end_date >= window.start_date() && self.start_date <= window.end_date()
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount(self.amount));
        }

        if self.start_date > self.end_date {
            return Err(BudgetValidationError::InvertedInterval {
                start: self.start_date,
                end: self.end_date,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for {}..{}",
            self.amount, self.start_date, self.end_date
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount(Money),
    InvertedInterval { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Budget amount must be positive (got {})", amount)
            }
            Self::InvertedInterval { start, end } => {
                write!(f, "Budget interval is inverted: {} > {}", start, end)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
