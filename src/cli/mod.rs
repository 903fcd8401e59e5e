//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod history;
pub mod user;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::handle_history_command;
pub use user::{handle_user_command, UserCommands};

use std::io::{self, BufRead, Write};

use crate::error::ExpenseResult;

/// Ask a yes/no question on stdin; anything but "y" or "yes" declines
pub(crate) fn confirm(prompt: &str) -> ExpenseResult<bool> {
    print!("{} (y/n): ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
