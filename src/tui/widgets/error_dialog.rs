//! Error dialog widget
//!
//! Displays an alert with error details and recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::ExpenseError;

/// An error dialog with details and suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from an ExpenseError
    pub fn from_error(error: &ExpenseError) -> Self {
        let (title, suggestions) = match error {
            ExpenseError::Config(_) => (
                "Configuration Error".to_string(),
                vec!["Check your settings file for syntax errors".to_string()],
            ),
            ExpenseError::Io(_) => (
                "I/O Error".to_string(),
                vec![
                    "Check that you have write permissions to the data directory".to_string(),
                    "Ensure there is enough disk space".to_string(),
                ],
            ),
            ExpenseError::Json(_) => (
                "Data File Error".to_string(),
                vec!["The stored expense data may be corrupted".to_string()],
            ),
            ExpenseError::Validation(_) => ("Missing Information".to_string(), Vec::new()),
            ExpenseError::NotFound {
                entity_type: "User",
                ..
            } => (
                "User Not Found".to_string(),
                vec!["Press Esc and choose [N] New user to create it".to_string()],
            ),
            ExpenseError::NotFound { entity_type, .. } => {
                (format!("{} Not Found", entity_type), Vec::new())
            }
            ExpenseError::Storage(_) => (
                "Storage Error".to_string(),
                vec!["Check that the data directory is accessible".to_string()],
            ),
            ExpenseError::Export(_) => (
                "Export Error".to_string(),
                vec!["Check that you have write permissions to the output path".to_string()],
            ),
            ExpenseError::Tui(_) => (
                "Interface Error".to_string(),
                vec!["Try resizing your terminal window".to_string()],
            ),
        };

        Self {
            title,
            details: error.user_message(),
            suggestions,
        }
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    /// Create a new error dialog widget
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl<'a> Widget for ErrorDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let lines: Vec<Line> = self
                .error
                .suggestions
                .iter()
                .map(|s| Line::from(vec![Span::raw("  - "), Span::raw(s.as_str())]))
                .collect();

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 60 / 100).clamp(40, 70).min(parent.width);
    let height = 10.min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
