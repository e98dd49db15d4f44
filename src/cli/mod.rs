//! CLI command handlers
//!
//! Each submodule defines a clap subcommand enum and its handler. Handlers
//! resolve the session once at the top and thread the owner id through
//! explicitly.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod export;
pub mod goal;
pub mod transaction;
pub mod user;
pub mod wealth;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use dashboard::handle_dashboard_command;
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::{handle_user_command, UserCommands};
pub use wealth::{handle_wealth_command, WealthCommands};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Month, UserId};
use crate::store::Store;

/// Resolve the logged-in user, failing with a hint when there is none
///
/// The dashboard treats "not logged in" as a well-defined empty state and
/// does not use this; every mutating command does.
pub(crate) fn require_login(store: &Store) -> PocketbookResult<UserId> {
    store.session.current_user()?.ok_or_else(|| {
        PocketbookError::Validation(
            "Not logged in. Run 'pocketbook user login <email>' first.".into(),
        )
    })
}

/// Parse a month argument, defaulting to the current month
pub(crate) fn parse_month(arg: Option<&str>) -> PocketbookResult<Month> {
    match arg {
        None => Ok(Month::current()),
        Some(s) if s.eq_ignore_ascii_case("current") => Ok(Month::current()),
        Some(s) if s.eq_ignore_ascii_case("last") => Ok(Month::current().prev()),
        Some(s) => {
            Month::parse(s).map_err(|e| PocketbookError::Validation(e.to_string()))
        }
    }
}
