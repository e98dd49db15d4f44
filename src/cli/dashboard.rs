//! Dashboard CLI command
//!
//! Shows the month summary, spending breakdown, and recent transactions.
//! Without a login this prints the well-defined empty dashboard rather than
//! failing.

use crate::config::settings::Settings;
use crate::display;
use crate::error::PocketbookResult;
use crate::models::{UserId, WealthRecord};
use crate::reports::{self, MonthSummary};
use crate::services::{CategoryService, DashboardService, WealthService};
use crate::store::Store;

/// Handle the dashboard command
pub fn handle_dashboard_command(
    store: &Store,
    settings: &Settings,
    month: Option<String>,
) -> PocketbookResult<()> {
    let month = super::parse_month(month.as_deref())?;
    let owner = store.session.current_user()?;

    let categories = CategoryService::new(store);
    let income_category = categories.income_category()?.map(|c| c.id);

    let dashboard = DashboardService::new(store, settings.budget_scope);
    let reconciliation = dashboard.load(owner, income_category, month)?;

    let wealth = match owner {
        Some(owner) => WealthService::new(store).get(owner)?,
        None => {
            println!("Not logged in; showing an empty dashboard.");
            println!();
            WealthRecord::empty(UserId::new())
        }
    };

    let summary = MonthSummary::compute(&reconciliation, income_category, &wealth);
    print!(
        "{}",
        display::format_month_summary(&summary, &settings.currency_symbol)
    );
    println!();

    let all_categories = categories.list()?;
    let breakdown = reports::category_breakdown(
        &reconciliation.transactions,
        &all_categories,
        income_category,
    );
    print!(
        "{}",
        display::format_category_breakdown(&breakdown, &settings.currency_symbol)
    );
    println!();

    let recent: Vec<_> = reconciliation
        .transactions
        .iter()
        .take(settings.recent_limit)
        .cloned()
        .collect();
    print!(
        "{}",
        display::format_transaction_table(&recent, &all_categories, &settings.currency_symbol)
    );

    Ok(())
}
