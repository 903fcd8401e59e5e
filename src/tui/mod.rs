//! Terminal User Interface module
//!
//! This module provides the interactive expense tracker using ratatui:
//! a welcome screen for choosing the user, then a tracker screen with the
//! expense form, the month-grouped list and the running total.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
