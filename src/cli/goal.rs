//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, SavingsGoal, UserId};
use crate::services::GoalService;
use crate::store::Store;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
    },

    /// List savings goals
    List {
        /// Only show completed goals
        #[arg(long)]
        completed: bool,
    },

    /// Contribute to a goal
    Contribute {
        /// Goal name
        name: String,
        /// Amount to add
        amount: String,
    },

    /// Delete a goal
    Delete {
        /// Goal name
        name: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    store: &Store,
    settings: &Settings,
    cmd: GoalCommands,
) -> PocketbookResult<()> {
    let owner = super::require_login(store)?;
    let service = GoalService::new(store);

    match cmd {
        GoalCommands::Add { name, target } => {
            let target = Money::parse(&target)
                .map_err(|e| PocketbookError::Validation(e.to_string()))?;
            let goal = service.create(owner, &name, target)?;
            println!(
                "Created goal '{}' with target {}",
                goal.name,
                goal.target_amount.format_with_symbol(&settings.currency_symbol)
            );
        }
        GoalCommands::List { completed } => {
            let goals = if completed {
                service.completed(owner)?
            } else {
                service.list(owner)?
            };
            print!(
                "{}",
                display::format_goal_list(&goals, &settings.currency_symbol)
            );
        }
        GoalCommands::Contribute { name, amount } => {
            let amount = Money::parse(&amount)
                .map_err(|e| PocketbookError::Validation(e.to_string()))?;
            let goal = find_goal(&service, owner, &name)?;
            let goal = service.contribute(owner, goal.id, amount)?;

            if goal.is_complete() {
                println!("Goal '{}' reached! 🎉", goal.name);
            } else {
                println!(
                    "'{}' now at {} / {}",
                    goal.name,
                    goal.current_amount.format_with_symbol(&settings.currency_symbol),
                    goal.target_amount.format_with_symbol(&settings.currency_symbol)
                );
            }
        }
        GoalCommands::Delete { name } => {
            let goal = find_goal(&service, owner, &name)?;
            service.delete(owner, goal.id)?;
            println!("Deleted goal '{}'", goal.name);
        }
    }

    Ok(())
}

fn find_goal(service: &GoalService, owner: UserId, name: &str) -> PocketbookResult<SavingsGoal> {
    let needle = name.trim().to_lowercase();
    service
        .list(owner)?
        .into_iter()
        .find(|g| g.name.trim().to_lowercase() == needle)
        .ok_or_else(|| PocketbookError::goal_not_found(name))
}
