//! Category model
//!
//! Categories label transactions. Exactly one category carries the `Income`
//! role; transactions in it count as income rather than spending.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// The role a category plays in budget math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryRole {
    /// Transactions in this category are income
    Income,
    /// Transactions in this category are spending
    #[default]
    Expense,
}

impl fmt::Display for CategoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A transaction category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Whether this category represents income or spending
    #[serde(default)]
    pub role: CategoryRole,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new expense category
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_role(name, CategoryRole::Expense)
    }

    /// Create a new category with an explicit role
    pub fn with_role(name: impl Into<String>, role: CategoryRole) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is the income category
    pub fn is_income(&self) -> bool {
        self.role == CategoryRole::Income
    }

    /// Check if this category's name matches the legacy income convention
    ///
    /// Older data identified the income category purely by name; resolution
    /// falls back to this when no category carries the `Income` role.
    pub fn has_income_name(&self) -> bool {
        self.name.trim().eq_ignore_ascii_case("income")
    }

    /// Rename the category
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Default expense categories seeded into a fresh store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Groceries,
    Dining,
    Transport,
    Housing,
    Entertainment,
    Health,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[
            Self::Groceries,
            Self::Dining,
            Self::Transport,
            Self::Housing,
            Self::Entertainment,
            Self::Health,
        ]
    }

    /// Get the name for this default category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Dining => "Dining Out",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
        }
    }

    /// Create a Category from this default
    pub fn to_category(&self) -> Category {
        Category::new(self.name())
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_defaults_to_expense() {
        let category = Category::new("Groceries");
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.role, CategoryRole::Expense);
        assert!(!category.is_income());
    }

    #[test]
    fn test_income_role() {
        let category = Category::with_role("Income", CategoryRole::Income);
        assert!(category.is_income());
    }

    #[test]
    fn test_legacy_income_name_match() {
        // Trimmed, case-insensitive
        let a = Category::new("  Income ");
        let b = Category::new("INCOME");
        let c = Category::new("Salary");

        assert!(a.has_income_name());
        assert!(b.has_income_name());
        assert!(!c.has_income_name());
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("Valid");
        assert!(category.validate().is_ok());

        category.name = String::new();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(_))
        ));
    }

    #[test]
    fn test_default_categories() {
        let defaults = DefaultCategory::all();
        assert_eq!(defaults.len(), 6);
        assert_eq!(defaults[0].name(), "Groceries");

        // None of the seeded expense categories may claim the income role
        for d in defaults {
            assert_eq!(d.to_category().role, CategoryRole::Expense);
        }
    }

    #[test]
    fn test_serialization() {
        let category = Category::with_role("Income", CategoryRole::Income);
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category.id, deserialized.id);
        assert_eq!(deserialized.role, CategoryRole::Income);
    }

    #[test]
    fn test_role_missing_in_stored_data_defaults_to_expense() {
        // Stored rows predating the role field deserialize as expenses
        let json = format!(
            r#"{{"id":"{}","name":"Rent","created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"}}"#,
            uuid::Uuid::new_v4()
        );
        let category: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category.role, CategoryRole::Expense);
    }
}
