//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and users for terminal display.

pub mod expense;

pub use expense::{format_expense_details, format_user_list};
