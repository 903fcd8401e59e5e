//! YAML Export functionality
//!
//! Exports one user's expenses to YAML for human-readable backup.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::UserExport;
use crate::services::Session;
use std::io::Write;

/// Export a session's expenses to YAML format
pub fn export_user_yaml<W: Write>(session: &Session, writer: &mut W) -> ExpenseResult<()> {
    let export = UserExport::from_session(session);

    writeln!(writer, "# Expense Tracker Export")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# User: {}", export.username)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};

    #[test]
    fn test_yaml_export() {
        let session = Session::new(
            "Alice",
            vec![Expense::new("Rent", Money::from_cents(1_500_000), "INR", "Bills", "March")],
        );

        let mut output = Vec::new();
        export_user_yaml(&session, &mut output).unwrap();

        let yaml_str = String::from_utf8(output).unwrap();
        assert!(yaml_str.starts_with("# Expense Tracker Export"));
        assert!(yaml_str.contains("username: Alice"));
        assert!(yaml_str.contains("name: Rent"));

        let restored: UserExport = serde_yaml::from_str(&yaml_str).unwrap();
        assert_eq!(restored.expenses, session.expenses());
    }
}
