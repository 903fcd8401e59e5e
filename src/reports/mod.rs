//! Reports module for the expense tracker
//!
//! Provides the month-grouped expense view and the total line shared by the
//! CLI and the TUI.

pub mod monthly;

pub use monthly::{format_total, GroupRow, MonthGroup, MonthlySummary};
