//! CSV Export functionality
//!
//! Exports one user's expenses to spreadsheet-compatible CSV.

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::Session;
use std::io::Write;

const HEADER: [&str; 7] = ["Position", "ID", "Month", "Name", "Amount", "Currency", "Category"];

/// Export a session's expenses to CSV, one row per expense in list order
pub fn export_user_csv<W: Write>(session: &Session, writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for (index, expense) in session.expenses().iter().enumerate() {
        csv_writer
            .write_record([
                (index + 1).to_string(),
                expense.id.as_uuid().to_string(),
                expense.month.clone(),
                expense.name.clone(),
                format!("{:.2}", expense.amount.as_f64()),
                expense.currency.clone(),
                expense.category.clone(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};

    #[test]
    fn test_csv_export() {
        let session = Session::new(
            "Alice",
            vec![
                Expense::new("Coffee", Money::from_cents(500), "USD", "Food", "January"),
                Expense::new("Dinner, with friends", Money::from_cents(12345), "INR", "Food", "May"),
            ],
        );

        let mut output = Vec::new();
        export_user_csv(&session, &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv_str.lines().collect();

        assert_eq!(lines[0], "Position,ID,Month,Name,Amount,Currency,Category");
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].ends_with(",January,Coffee,5.00,USD,Food"));
        assert!(lines[2].contains("\"Dinner, with friends\",123.45"));
    }

    #[test]
    fn test_empty_export_has_header() {
        let mut output = Vec::new();
        export_user_csv(&Session::new("Bob", Vec::new()), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Position,ID,Month,Name,Amount,Currency,Category\n"
        );
    }
}
