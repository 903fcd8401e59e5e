//! Expense form input
//!
//! Raw field values as typed by the user, and their validation into an
//! [`Expense`].

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

const MISSING_FIELDS: &str = "Please fill in all the fields.";

/// The five form fields as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub currency: String,
    pub category: String,
    pub month: String,
}

impl ExpenseForm {
    /// Create a form from raw field values
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
        category: impl Into<String>,
        month: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            currency: currency.into(),
            category: category.into(),
            month: month.into(),
        }
    }

    /// A form pre-filled with the values of an existing expense
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: expense.amount.to_string(),
            currency: expense.currency.clone(),
            category: expense.category.clone(),
            month: expense.month.clone(),
        }
    }

    /// Check that every required field is present
    pub fn validate(&self) -> ExpenseResult<()> {
        let required = [&self.name, &self.amount, &self.month];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ExpenseError::Validation(MISSING_FIELDS.into()));
        }
        Ok(())
    }

    /// Validate the form and build an expense with a fresh id
    ///
    /// An empty currency falls back to `default_currency`.
    pub fn build(&self, default_currency: &str) -> ExpenseResult<Expense> {
        self.validate()?;

        let amount = Money::parse(self.amount.trim())
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let currency = match self.currency.trim() {
            "" => default_currency.to_string(),
            code => code.to_string(),
        };

        Ok(Expense::new(
            self.name.trim(),
            amount,
            currency,
            self.category.clone(),
            self.month.trim(),
        ))
    }

    /// Reset name and amount after a successful submit
    ///
    /// The remaining fields keep their values so several expenses for the
    /// same month and category can be entered in a row.
    pub fn clear_name_and_amount(&mut self) {
        self.name.clear();
        self.amount.clear();
    }
}
