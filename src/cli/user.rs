//! User CLI commands
//!
//! Implements CLI commands for creating, checking, listing and removing users.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_user_list;
use crate::error::ExpenseResult;
use crate::services::{SessionService, UserType};
use crate::storage::Storage;

use super::confirm;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Start a new user with an empty expense list
    ///
    /// Any expenses already stored under the name are discarded.
    New {
        /// Username
        name: String,
    },
    /// Check that a user exists
    Check {
        /// Username
        name: String,
    },
    /// List all stored users
    List,
    /// Remove a user and all their expenses
    Remove {
        /// Username
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    settings: &Settings,
    cmd: UserCommands,
) -> ExpenseResult<()> {
    let service = SessionService::new(storage);

    match cmd {
        UserCommands::New { name } => {
            let replaced = service.user_exists(&name)?;
            let session = service.start(&name, UserType::New)?;

            println!("Created user: {}", session.username());
            if replaced {
                println!("  Previously stored expenses were discarded.");
            }
        }

        UserCommands::Check { name } => {
            let session = service.start(&name, UserType::Existing)?;
            println!(
                "User '{}' exists with {} expense(s).",
                session.username(),
                session.len()
            );
        }

        UserCommands::List => {
            let users = service.list_users()?;
            println!("{}", format_user_list(&users, &settings.total_label));
        }

        UserCommands::Remove { name, yes } => {
            let session = service.start(&name, UserType::Existing)?;

            if !yes {
                let prompt = format!(
                    "Remove user '{}' and {} expense(s)?",
                    session.username(),
                    session.len()
                );
                if !confirm(&prompt)? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            service.remove_user(session.username())?;
            println!("Removed user: {}", session.username());
        }
    }

    Ok(())
}
