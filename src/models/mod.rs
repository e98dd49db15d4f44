//! Core data models for Pocketbook
//!
//! This module contains the data structures that represent the finance
//! domain: users, categories, transactions, budgets, savings goals, wealth
//! records, and the calendar-month window type the dashboard math runs on.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;
pub mod user;
pub mod wealth;

pub use budget::Budget;
pub use category::{Category, CategoryRole, DefaultCategory};
pub use goal::SavingsGoal;
pub use ids::{BudgetId, CategoryId, GoalId, TransactionId, UserId};
pub use money::Money;
pub use month::{Month, MonthWindow};
pub use transaction::Transaction;
pub use user::User;
pub use wealth::WealthRecord;
