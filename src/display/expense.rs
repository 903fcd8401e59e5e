//! Expense display formatting
//!
//! Formats expenses and users for terminal output in detail and table views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::services::UserSummary;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "User")]
    username: String,
    #[tabled(rename = "Expenses")]
    expense_count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the stored users as a table
pub fn format_user_list(users: &[UserSummary], total_label: &str) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let rows = users.iter().map(|u| UserRow {
        username: u.username.clone(),
        expense_count: u.expense_count,
        total: u.total.format_with_currency(total_label),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format a single expense's details
///
/// `position` is the zero-based list position.
pub fn format_expense_details(expense: &Expense, position: usize) -> String {
    let category = if expense.category.is_empty() {
        "(none)"
    } else {
        expense.category.as_str()
    };

    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!("  Position:  #{}\n", position + 1));
    output.push_str(&format!("  ID:        {}\n", expense.id));
    output.push_str(&format!(
        "  Amount:    {}\n",
        expense.amount.format_with_currency(&expense.currency)
    ));
    output.push_str(&format!("  Category:  {}\n", category));
    output.push_str(&format!("  Month:     {}\n", expense.month));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_user_list_table() {
        let users = vec![
            UserSummary {
                username: "Alice".into(),
                expense_count: 2,
                total: Money::from_cents(1050),
            },
            UserSummary {
                username: "Bob".into(),
                expense_count: 0,
                total: Money::zero(),
            },
        ];

        let output = format_user_list(&users, "INR");
        assert!(output.contains("User"));
        assert!(output.contains("Alice"));
        assert!(output.contains("INR 10.50"));
        assert!(output.contains("INR 0.00"));
    }

    #[test]
    fn test_empty_user_list() {
        assert_eq!(format_user_list(&[], "INR"), "No users found.");
    }

    #[test]
    fn test_expense_details() {
        let expense = Expense::new("Coffee", Money::from_cents(500), "USD", "", "January");
        let output = format_expense_details(&expense, 2);

        assert!(output.starts_with("Expense: Coffee\n"));
        assert!(output.contains("#3"));
        assert!(output.contains("USD 5.00"));
        assert!(output.contains("(none)"));
    }
}
