//! Layout definitions for the TUI
//!
//! Defines the tracker screen structure: header, form and list columns,
//! total line and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the tracker screen
pub struct TrackerLayout {
    /// Greeting line
    pub header: Rect,
    /// Expense form (left column)
    pub form: Rect,
    /// Month-grouped expense list (right column)
    pub list: Rect,
    /// Running total
    pub total: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl TrackerLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Form + list
                Constraint::Length(3), // Total
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(44), // Form (fixed width)
                Constraint::Min(30),    // List
            ])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            form: horizontal[0],
            list: horizontal[1],
            total: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
