//! JSON Export functionality
//!
//! Exports one user's expenses to JSON with schema versioning.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::reports::MonthlySummary;
use crate::services::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export of a single user's expense list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Owner of the expenses
    pub username: String,

    /// Expenses in list order
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of expenses
    pub expense_count: usize,

    /// Sum of all amounts
    pub total: Money,

    /// Months in first-seen order
    pub months: Vec<String>,
}

impl UserExport {
    /// Build an export from the active session
    pub fn from_session(session: &Session) -> Self {
        let summary = MonthlySummary::generate(session.expenses());

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            username: session.username().to_string(),
            expenses: session.expenses().to_vec(),
            metadata: ExportMetadata {
                expense_count: summary.expense_count,
                total: summary.total,
                months: summary.groups.into_iter().map(|g| g.month).collect(),
            },
        }
    }
}

/// Export a session's expenses as pretty-printed JSON
pub fn export_user_json<W: Write>(session: &Session, writer: &mut W) -> ExpenseResult<()> {
    let export = UserExport::from_session(session);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
