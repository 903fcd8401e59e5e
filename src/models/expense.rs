//! Expense model
//!
//! A single expense entry: what was bought, how much it cost, in which
//! currency, under which category and in which month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Currency recorded when none is given
pub const DEFAULT_CURRENCY: &str = "INR";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// One expense record
///
/// Records written before ids existed load with a freshly generated id, which
/// [`crate::storage::UserRepository::get`] writes back to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identifier
    #[serde(default)]
    pub id: ExpenseId,

    /// What the money was spent on
    pub name: String,

    /// Amount spent
    pub amount: Money,

    /// Currency code the amount was entered in
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Spending category (may be empty)
    #[serde(default)]
    pub category: String,

    /// Month the expense belongs to; used as the grouping key
    pub month: String,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        currency: impl Into<String>,
        category: impl Into<String>,
        month: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            currency: currency.into(),
            category: category.into(),
            month: month.into(),
        }
    }

    /// Replace every field except the id with the values of `other`
    pub fn overwrite_with(&mut self, other: Expense) {
        let id = self.id;
        *self = other;
        self.id = id;
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {} ({})",
            self.name, self.currency, self.amount, self.category
        )
    }
}
