//! Service layer for Pocketbook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, derived values, and cross-entity operations. The
//! dashboard service carries the month-reconciliation math the rest of the
//! application is built around.

pub mod assist;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod goal;
pub mod transaction;
pub mod wealth;

pub use assist::{ParsedTransaction, TransactionKind, TransactionParser};
pub use budget::BudgetService;
pub use category::CategoryService;
pub use dashboard::{DashboardService, MonthDataSource, MonthlyReconciliation};
pub use goal::GoalService;
pub use transaction::TransactionService;
pub use wealth::WealthService;
