//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its id, money amounts and month choices.

pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use expense::{Expense, DEFAULT_CURRENCY};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{current_month, MONTHS};
