//! Monthly summary
//!
//! Groups a user's expenses by month for display, with a running total.

use crate::models::{Expense, ExpenseId, Money};

/// One expense as shown inside its month group
#[derive(Debug, Clone)]
pub struct GroupRow {
    /// 1-based number within the month group (display only)
    pub group_position: usize,
    /// Zero-based position in the full list
    pub position: usize,
    /// Stable id of the expense
    pub id: ExpenseId,
    /// The expense itself
    pub expense: Expense,
}

impl GroupRow {
    /// Row text without numbering: `{name} - {currency} {amount} ({category})`
    pub fn label(&self) -> String {
        self.expense.to_string()
    }
}

/// All expenses sharing one month value
#[derive(Debug, Clone)]
pub struct MonthGroup {
    /// Month value exactly as recorded
    pub month: String,
    /// Rows in list order
    pub rows: Vec<GroupRow>,
    /// Sum of the group's amounts
    pub subtotal: Money,
}

/// Month-grouped view of an expense list
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    /// Groups in the order their month first appears in the list
    pub groups: Vec<MonthGroup>,
    /// Sum of every amount in the list
    pub total: Money,
    /// Number of expenses
    pub expense_count: usize,
}

impl MonthlySummary {
    /// Build the summary for an expense list
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut groups: Vec<MonthGroup> = Vec::new();

        for (position, expense) in expenses.iter().enumerate() {
            let index = match groups.iter().position(|g| g.month == expense.month) {
                Some(index) => index,
                None => {
                    groups.push(MonthGroup {
                        month: expense.month.clone(),
                        rows: Vec::new(),
                        subtotal: Money::zero(),
                    });
                    groups.len() - 1
                }
            };

            let group = &mut groups[index];
            group.subtotal += expense.amount;
            group.rows.push(GroupRow {
                group_position: group.rows.len() + 1,
                position,
                id: expense.id,
                expense: expense.clone(),
            });
        }

        Self {
            groups,
            total: expenses.iter().map(|e| e.amount).sum(),
            expense_count: expenses.len(),
        }
    }

    /// Whether there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Rows of every group flattened in display order
    pub fn rows(&self) -> impl Iterator<Item = &GroupRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    /// Format the summary for terminal display
    ///
    /// Rows are numbered within their month; the `[#n]` suffix is the list
    /// position accepted by `edit` and `delete`.
    pub fn format_terminal(&self, total_label: &str, show_subtotals: bool) -> String {
        let mut output = String::new();

        if self.is_empty() {
            output.push_str("No expenses recorded.\n");
        }

        for group in &self.groups {
            output.push_str(&format!("{}\n", group.month));
            output.push_str(&"-".repeat(group.month.chars().count().max(10)));
            output.push('\n');

            for row in &group.rows {
                output.push_str(&format!(
                    "{}. {}  [#{}]\n",
                    row.group_position,
                    row.label(),
                    row.position + 1
                ));
            }

            if show_subtotals {
                output.push_str(&format!(
                    "   Subtotal: {}\n",
                    group.subtotal.format_with_currency(total_label)
                ));
            }
            output.push('\n');
        }

        output.push_str(&format_total(self.total, total_label));
        output.push('\n');

        output
    }
}

/// The total line, e.g. `Total: INR 5.00`
///
/// The label is fixed and independent of the records' own currencies.
pub fn format_total(total: Money, label: &str) -> String {
    format!("Total: {}", total.format_with_currency(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(name: &str, cents: i64, month: &str) -> Expense {
        Expense::new(name, Money::from_cents(cents), "INR", "Food", month)
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let expenses = vec![
            expense("A", 100, "March"),
            expense("B", 200, "January"),
            expense("C", 300, "March"),
        ];

        let summary = MonthlySummary::generate(&expenses);

        let months: Vec<_> = summary.groups.iter().map(|g| g.month.as_str()).collect();
        assert_eq!(months, vec!["March", "January"]);

        let march = &summary.groups[0];
        assert_eq!(march.rows.len(), 2);
        assert_eq!(march.rows[0].expense.name, "A");
        assert_eq!(march.rows[1].expense.name, "C");
        assert_eq!(march.rows[1].group_position, 2);
        assert_eq!(march.rows[1].position, 2);
        assert_eq!(march.subtotal, Money::from_cents(400));
    }

    #[test]
    fn test_every_expense_in_exactly_one_matching_group() {
        let expenses = vec![
            expense("A", 100, "May"),
            expense("B", 200, "June"),
            expense("C", 300, "May"),
            expense("D", 400, "July"),
        ];

        let summary = MonthlySummary::generate(&expenses);

        assert_eq!(summary.rows().count(), expenses.len());
        for group in &summary.groups {
            assert!(group.rows.iter().all(|r| r.expense.month == group.month));
        }
        for (position, e) in expenses.iter().enumerate() {
            let matches: Vec<_> = summary.rows().filter(|r| r.id == e.id).collect();
            assert_eq!(matches.len(), 1);
            assert_eq!(matches[0].position, position);
        }
    }

    #[test]
    fn test_total_is_sum_of_all_amounts() {
        let expenses = vec![
            expense("A", 1050, "May"),
            expense("B", 1, "June"),
            expense("C", 249, "May"),
        ];

        let summary = MonthlySummary::generate(&expenses);
        assert_eq!(summary.total, Money::from_cents(1300));
        assert_eq!(format_total(summary.total, "INR"), "Total: INR 13.00");
    }

    #[test]
    fn test_total_label_ignores_record_currency() {
        let coffee = Expense::new("Coffee", Money::from_cents(500), "USD", "Food", "January");
        let summary = MonthlySummary::generate(&[coffee]);

        let output = summary.format_terminal("INR", false);
        assert!(output.contains("1. Coffee - USD 5.00 (Food)"));
        assert!(output.ends_with("Total: INR 5.00\n"));
    }

    #[test]
    fn test_two_months_two_sections() {
        let expenses = vec![expense("A", 100, "January"), expense("B", 100, "February")];
        let summary = MonthlySummary::generate(&expenses);

        assert_eq!(summary.groups.len(), 2);
        let output = summary.format_terminal("INR", false);
        assert!(output.contains("January\n"));
        assert!(output.contains("February\n"));
        assert!(output.contains("1. B - INR 1.00 (Food)  [#2]"));
    }

    #[test]
    fn test_subtotals_shown_on_request() {
        let summary = MonthlySummary::generate(&[expense("A", 250, "May")]);

        assert!(summary
            .format_terminal("INR", true)
            .contains("Subtotal: INR 2.50"));
        assert!(!summary.format_terminal("INR", false).contains("Subtotal"));
    }

    #[test]
    fn test_empty_list() {
        let summary = MonthlySummary::generate(&[]);

        assert!(summary.is_empty());
        assert_eq!(summary.total, Money::zero());
        assert_eq!(
            summary.format_terminal("INR", false),
            "No expenses recorded.\nTotal: INR 0.00\n"
        );
    }
}
