//! Category CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::CategoryRole;
use crate::services::CategoryService;
use crate::store::Store;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a category
    Add {
        /// Category name
        name: String,
        /// Mark this as the income category
        #[arg(long)]
        income: bool,
    },

    /// List all categories
    List,

    /// Rename a category
    Rename {
        /// Current name
        name: String,
        /// New name
        new_name: String,
    },

    /// Delete a category
    Delete {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &Store, cmd: CategoryCommands) -> PocketbookResult<()> {
    let service = CategoryService::new(store);

    match cmd {
        CategoryCommands::Add { name, income } => {
            let role = if income {
                CategoryRole::Income
            } else {
                CategoryRole::Expense
            };
            let category = service.create(&name, role)?;
            println!("Created category '{}' ({})", category.name, category.role);
        }
        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", display::format_category_list(&categories));
        }
        CategoryCommands::Rename { name, new_name } => {
            let category = service
                .find(&name)?
                .ok_or_else(|| PocketbookError::category_not_found(name))?;
            let renamed = service.rename(category.id, &new_name)?;
            println!("Renamed category to '{}'", renamed.name);
        }
        CategoryCommands::Delete { name } => {
            let category = service
                .find(&name)?
                .ok_or_else(|| PocketbookError::category_not_found(name))?;
            service.delete(category.id)?;
            println!("Deleted category '{}'", category.name);
        }
    }

    Ok(())
}
