//! Status bar view
//!
//! Shows the active user, edit state and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(session) = &app.session {
        spans.push(Span::styled(" User: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            session.username().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

        if let Some(position) = session
            .edit_target()
            .and_then(|id| session.position_of(id))
        {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                format!("Editing #{}", position + 1),
                Style::default().fg(Color::Magenta),
            ));
        }
    }

    // Key hints (right-aligned)
    let hints = match app.focused_panel {
        FocusedPanel::Form => " Tab:List  Enter:Save  Ctrl+c:Quit ",
        FocusedPanel::List => " e:Edit  d:Delete  b:Back  q:Quit  ?:Help ",
    };

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
