//! Audit history command

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent audit entries, optionally for one user
pub fn handle_history_command(
    storage: &Storage,
    user: Option<&str>,
    limit: usize,
) -> ExpenseResult<()> {
    let entries = storage.audit().read_recent(limit, user)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
