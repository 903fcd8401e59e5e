//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the current screen

pub mod confirm;
pub mod help;
