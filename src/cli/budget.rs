//! Budget CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{BudgetId, Money};
use crate::services::{BudgetService, CategoryService};
use crate::store::Store;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Declare a budget
    Add {
        /// Amount (e.g., "400" or "400.00")
        amount: String,
        /// Month the budget covers (defaults to current; overridden by --start/--end)
        #[arg(short, long)]
        month: Option<String>,
        /// Explicit first day (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// Explicit last day (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List budgets belonging to a month
    List {
        /// Month (e.g., "2024-03", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &Store,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PocketbookResult<()> {
    let owner = super::require_login(store)?;
    let service = BudgetService::new(store, settings.budget_scope);

    match cmd {
        BudgetCommands::Add {
            amount,
            month,
            start,
            end,
            category,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| PocketbookError::Validation(e.to_string()))?;

            let (start_date, end_date) = match (start, end) {
                (Some(start), Some(end)) => (parse_date(&start)?, parse_date(&end)?),
                (None, None) => {
                    let month = super::parse_month(month.as_deref())?;
                    (month.first_day(), month.last_day())
                }
                _ => {
                    return Err(PocketbookError::Validation(
                        "--start and --end must be given together".into(),
                    ))
                }
            };

            let category_id = match category {
                Some(name) => Some(
                    CategoryService::new(store)
                        .find(&name)?
                        .ok_or_else(|| PocketbookError::category_not_found(name))?
                        .id,
                ),
                None => None,
            };

            let budget = service.create(owner, amount, start_date, end_date, category_id)?;
            println!(
                "Declared budget {} for {}..{}",
                budget.amount.format_with_symbol(&settings.currency_symbol),
                budget.start_date,
                budget.end_date
            );
        }
        BudgetCommands::List { month } => {
            let month = super::parse_month(month.as_deref())?;
            let budgets = service.list_month(owner, month)?;

            println!("Budgets for {}", month.friendly());
            if budgets.is_empty() {
                println!("  (none)");
            }
            for budget in &budgets {
                println!(
                    "  {}  {}  {}..{}",
                    budget.id,
                    budget.amount.format_with_symbol(&settings.currency_symbol),
                    budget.start_date,
                    budget.end_date
                );
            }

            let total = service.month_total(owner, month)?;
            println!(
                "  Total: {}",
                total.format_with_symbol(&settings.currency_symbol)
            );
        }
        BudgetCommands::Delete { id } => {
            let id: BudgetId = id
                .parse()
                .map_err(|_| PocketbookError::Validation(format!("Invalid budget ID: {}", id)))?;
            service.delete(owner, id)?;
            println!("Deleted budget {}", id);
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> PocketbookResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| PocketbookError::Validation(format!("Invalid date: {}", s)))
}
