//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, TransactionId};
use crate::services::{CategoryService, TransactionService};
use crate::store::Store;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Description
        description: String,
        /// Amount (e.g., "25" or "25.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Occurrence date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Mood tag
        #[arg(short, long)]
        emotion: Option<String>,
    },

    /// List transactions for a month
    List {
        /// Month (e.g., "2024-03", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the most recent transactions
    Recent {
        /// Number of transactions to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &Store,
    settings: &Settings,
    cmd: TransactionCommands,
) -> PocketbookResult<()> {
    let owner = super::require_login(store)?;
    let service = TransactionService::new(store);
    let categories = CategoryService::new(store);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            date,
            emotion,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| PocketbookError::Validation(e.to_string()))?;

            let category = categories
                .find(&category)?
                .ok_or_else(|| PocketbookError::category_not_found(category))?;

            let occurred_at = match date {
                Some(s) => {
                    let date = NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                        PocketbookError::Validation(format!("Invalid date: {}", s))
                    })?;
                    Some(
                        date.and_hms_opt(12, 0, 0)
                            .expect("valid time")
                            .and_utc(),
                    )
                }
                None => None,
            };

            let txn = service.record(
                owner,
                &description,
                amount,
                category.id,
                occurred_at,
                emotion,
            )?;
            println!(
                "Recorded {} ({}) in '{}'",
                txn.description,
                txn.amount.format_with_symbol(&settings.currency_symbol),
                category.name
            );
        }
        TransactionCommands::List { month } => {
            let month = super::parse_month(month.as_deref())?;
            let transactions = service.list_month(owner, month)?;
            let all_categories = categories.list()?;

            println!("Transactions for {}", month.friendly());
            print!(
                "{}",
                display::format_transaction_table(
                    &transactions,
                    &all_categories,
                    &settings.currency_symbol
                )
            );
        }
        TransactionCommands::Recent { limit } => {
            let transactions = service.recent(owner, limit)?;
            let all_categories = categories.list()?;
            print!(
                "{}",
                display::format_transaction_table(
                    &transactions,
                    &all_categories,
                    &settings.currency_symbol
                )
            );
        }
        TransactionCommands::Delete { id } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| PocketbookError::Validation(format!("Invalid transaction ID: {}", id)))?;
            service.delete(owner, id)?;
            println!("Deleted transaction {}", id);
        }
    }

    Ok(())
}
