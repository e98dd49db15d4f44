//! User CLI commands

use clap::Subcommand;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::User;
use crate::store::Store;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Register {
        /// Email address
        email: String,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Log in as a user
    Login {
        /// Email address
        email: String,
    },

    /// Log out
    Logout,

    /// Show the logged-in user
    Current,
}

/// Handle a user command
pub fn handle_user_command(store: &Store, cmd: UserCommands) -> PocketbookResult<()> {
    match cmd {
        UserCommands::Register { email, name } => {
            if store.users.get_by_email(&email)?.is_some() {
                return Err(PocketbookError::Duplicate {
                    entity_type: "User",
                    identifier: email,
                });
            }

            let user = match name {
                Some(name) => User::with_display_name(email, name),
                None => User::new(email),
            };
            user.validate()
                .map_err(|e| PocketbookError::Validation(e.to_string()))?;

            store.users.upsert(user.clone())?;
            store.users.save()?;

            println!("Registered {}", user);
        }
        UserCommands::Login { email } => {
            let user = store
                .users
                .get_by_email(&email)?
                .ok_or_else(|| PocketbookError::user_not_found(email))?;

            store.session.login(user.id)?;
            println!("Logged in as {}", user);
        }
        UserCommands::Logout => {
            store.session.logout()?;
            println!("Logged out.");
        }
        UserCommands::Current => match store.session.current_user()? {
            Some(id) => match store.users.get(id)? {
                Some(user) => println!("Logged in as {}", user),
                None => println!("Session points at an unknown user ({})", id),
            },
            None => println!("Not logged in."),
        },
    }

    Ok(())
}
