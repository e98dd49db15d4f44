//! Terminal output formatting
//!
//! Formats domain data for terminal display in tables and trees.

pub mod dashboard;
pub mod goal;
pub mod transaction;

pub use dashboard::{format_category_breakdown, format_category_list, format_month_summary};
pub use goal::format_goal_list;
pub use transaction::format_transaction_table;
