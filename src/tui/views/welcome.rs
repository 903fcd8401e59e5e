//! Welcome screen
//!
//! Asks whether this is a new or existing user, then reveals the
//! username input.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::services::UserType;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the welcome screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect_fixed(56, 11, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Expense Tracker ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you a new or existing user?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            choice_span("[N]", " New user", app.user_type == Some(UserType::New)),
            Span::raw("    "),
            choice_span(
                "[E]",
                " Existing user",
                app.user_type == Some(UserType::Existing),
            ),
        ]),
        Line::from(""),
    ];

    match app.user_type {
        Some(_) => {
            let mut input = vec![Span::styled("Your name: ", Style::default().fg(Color::Cyan))];
            input.extend(app.username_input.value_spans());
            lines.push(Line::from(input));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[Enter] Start  [Esc] Back",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => {
            lines.push(Line::from(""));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[q] Quit  [?] Help",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn choice_span(key: &'static str, label: &'static str, chosen: bool) -> Span<'static> {
    let style = if chosen {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(format!("{}{}", key, label), style)
}
