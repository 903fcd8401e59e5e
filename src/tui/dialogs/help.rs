//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let help_lines = get_help_lines(app);
    let height = help_lines.len() as u16 + 2;
    let area = centered_rect_fixed(60, height, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current screen
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("Ctrl+c", "Quit application"),
        key_line("?", "Show/hide help"),
        Line::from(""),
    ];

    match app.screen {
        Screen::Welcome => {
            lines.push(section("Welcome"));
            lines.push(Line::from(""));
            lines.push(key_line("n", "New user (starts with an empty list)"));
            lines.push(key_line("e", "Existing user"));
            lines.push(key_line("Enter", "Start with the entered name"));
            lines.push(key_line("Esc", "Back to user type choice"));
            lines.push(key_line("q", "Quit"));
        }
        Screen::Tracker => {
            lines.push(section("Expense Form"));
            lines.push(Line::from(""));
            lines.push(key_line("↑/↓", "Previous/next field"));
            lines.push(key_line("←/→", "Change category or month"));
            lines.push(key_line("Enter", "Add expense, or update when editing"));
            lines.push(key_line("Esc", "Cancel edit"));
            lines.push(Line::from(""));
            lines.push(section("Expense List"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Switch between form and list"));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("e/Enter", "Edit selected expense"));
            lines.push(key_line("d", "Delete selected expense"));
            lines.push(key_line("b", "Back to welcome screen"));
            lines.push(key_line("q", "Quit"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
