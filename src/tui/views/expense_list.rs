//! Expense list panel
//!
//! Shows the session's expenses grouped by month, numbered within each
//! group, with a subtotal under every month.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::ExpenseId;
use crate::reports::MonthlySummary;
use crate::tui::app::{App, FocusedPanel};

/// Render the expense list panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::List;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let summary = app.summary();
    let title = format!(" Expenses ({}) ", summary.expense_count);

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if summary.is_empty() {
        let text = Paragraph::new("No expenses yet. Fill in the form and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let editing = app.session.as_ref().and_then(|s| s.edit_target());
    let (items, selected) = build_items(&summary, app.selected_row, editing);

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if is_focused {
        state.select(selected);
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// List items for every group, and the item index of the selected row
fn build_items(
    summary: &MonthlySummary,
    selected_row: usize,
    editing: Option<ExpenseId>,
) -> (Vec<ListItem<'static>>, Option<usize>) {
    let mut items = Vec::new();
    let mut selected = None;
    let mut row_index = 0;

    for group in &summary.groups {
        items.push(ListItem::new(Line::from(Span::styled(
            group.month.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))));

        for row in &group.rows {
            if row_index == selected_row {
                selected = Some(items.len());
            }
            row_index += 1;

            let style = if editing == Some(row.id) {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::White)
            };

            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("  {}. ", row.group_position),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(row.label(), style),
            ])));
        }

        items.push(ListItem::new(Line::from(Span::styled(
            format!("     Subtotal: {}", group.subtotal),
            Style::default().fg(Color::DarkGray),
        ))));
    }

    (items, selected)
}
