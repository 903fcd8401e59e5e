//! TUI Views module
//!
//! Contains the welcome and tracker screens, the expense form panel
//! and the status bar.

pub mod expense_form;
pub mod expense_list;
pub mod status_bar;
pub mod welcome;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App, Screen};
use super::dialogs;
use super::layout::TrackerLayout;
use super::widgets::{error_dialog_area, ErrorDialog, NotificationWidget};
use crate::reports::format_total;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Welcome => welcome::render(frame, app, frame.area()),
        Screen::Tracker => render_tracker(frame, app),
    }

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let widget = NotificationWidget::new(notification);
        let area = widget.area(frame.area());
        frame.render_widget(widget, area);
    }
}

/// Render the tracker screen
fn render_tracker(frame: &mut Frame, app: &App) {
    let layout = TrackerLayout::new(frame.area());

    render_header(frame, app, layout.header);
    expense_form::render(frame, app, layout.form);
    expense_list::render(frame, app, layout.list);
    render_total(frame, app, layout.total);
    status_bar::render(frame, app, layout.status_bar);
}

/// Greeting for the active user
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let username = app.session.as_ref().map(|s| s.username()).unwrap_or("");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled(" Expense Tracker", Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(
            format!("Welcome, {}!", username),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Running total of every expense
fn render_total(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.session.as_ref().map(|s| s.total()).unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(format!(" {}", format_total(total, &app.settings.total_label)))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(id) => {
            let subject = app
                .session
                .as_ref()
                .and_then(|s| s.position_of(*id).and_then(|p| s.get(p)))
                .map(|e| e.to_string())
                .unwrap_or_default();
            dialogs::confirm::render(
                frame,
                "Are you sure you want to delete this expense?",
                &subject,
            );
        }
        ActiveDialog::Alert(info) => {
            let area = error_dialog_area(frame.area());
            frame.render_widget(ErrorDialog::new(info), area);
        }
        ActiveDialog::None => {}
    }
}
