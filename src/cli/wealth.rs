//! Wealth CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Money;
use crate::services::WealthService;
use crate::store::Store;

/// Wealth subcommands
#[derive(Subcommand)]
pub enum WealthCommands {
    /// Set cash and savings figures
    Set {
        /// Cash on hand
        cash: String,
        /// Money in savings
        savings: String,
    },

    /// Show wealth figures
    Show,
}

/// Handle a wealth command
pub fn handle_wealth_command(
    store: &Store,
    settings: &Settings,
    cmd: WealthCommands,
) -> PocketbookResult<()> {
    let owner = super::require_login(store)?;
    let service = WealthService::new(store);

    match cmd {
        WealthCommands::Set { cash, savings } => {
            let cash =
                Money::parse(&cash).map_err(|e| PocketbookError::Validation(e.to_string()))?;
            let savings =
                Money::parse(&savings).map_err(|e| PocketbookError::Validation(e.to_string()))?;

            let record = service.set(owner, cash, savings)?;
            println!(
                "Wealth updated: {} cash, {} savings",
                record.cash.format_with_symbol(&settings.currency_symbol),
                record.savings.format_with_symbol(&settings.currency_symbol)
            );
        }
        WealthCommands::Show => {
            let record = service.get(owner)?;
            println!(
                "Cash:    {}",
                record.cash.format_with_symbol(&settings.currency_symbol)
            );
            println!(
                "Savings: {}",
                record.savings.format_with_symbol(&settings.currency_symbol)
            );
            println!(
                "Total:   {}",
                record.total().format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
