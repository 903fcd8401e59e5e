//! Expense form panel
//!
//! Left-hand panel of the tracker screen: name, amount and currency text
//! fields, plus category and month choices cycled with the arrow keys.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::settings::Settings;
use crate::models::{current_month, MONTHS};
use crate::services::ExpenseForm;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Currency,
    Category,
    Month,
}

impl ExpenseField {
    /// Get the next field
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Currency,
            Self::Currency => Self::Category,
            Self::Category => Self::Month,
            Self::Month => Self::Name,
        }
    }

    /// Get the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Month,
            Self::Amount => Self::Name,
            Self::Currency => Self::Amount,
            Self::Category => Self::Currency,
            Self::Month => Self::Category,
        }
    }
}

/// A fixed list of values cycled with ←/→
#[derive(Debug, Clone)]
pub struct ChoiceField {
    options: Vec<String>,
    index: usize,
}

impl ChoiceField {
    /// Create a choice over `options` with `selected` chosen
    ///
    /// A value not among the options is appended so it can be kept.
    pub fn new(options: Vec<String>, selected: &str) -> Self {
        let mut field = Self { options, index: 0 };
        field.select(selected);
        field
    }

    /// Currently chosen value
    pub fn value(&self) -> &str {
        self.options.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// Choose `value`, adding it to the options if missing
    pub fn select(&mut self, value: &str) {
        match self.options.iter().position(|o| o == value) {
            Some(index) => self.index = index,
            None => {
                self.options.push(value.to_string());
                self.index = self.options.len() - 1;
            }
        }
    }

    /// Move to the next option, wrapping around
    pub fn cycle_next(&mut self) {
        if !self.options.is_empty() {
            self.index = (self.index + 1) % self.options.len();
        }
    }

    /// Move to the previous option, wrapping around
    pub fn cycle_prev(&mut self) {
        if !self.options.is_empty() {
            self.index = (self.index + self.options.len() - 1) % self.options.len();
        }
    }
}

/// State for the expense form panel
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Name input
    pub name_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Currency input
    pub currency_input: TextInput,

    /// Category choice (empty option means none)
    pub category: ChoiceField,

    /// Month choice
    pub month: ChoiceField,

    /// Whether the form holds an expense being edited
    pub is_edit: bool,
}

impl ExpenseFormState {
    /// Create a blank form using the configured currency and categories
    pub fn new(settings: &Settings) -> Self {
        let mut categories = vec![String::new()];
        categories.extend(settings.categories.iter().cloned());

        let mut state = Self {
            focused_field: ExpenseField::Name,
            name_input: TextInput::new().label("Name").placeholder("What was it?"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            currency_input: TextInput::new()
                .label("Currency")
                .placeholder(settings.default_currency.clone())
                .content(settings.default_currency.clone()),
            category: ChoiceField::new(categories, ""),
            month: ChoiceField::new(
                MONTHS.iter().map(|m| m.to_string()).collect(),
                current_month(),
            ),
            is_edit: false,
        };
        state.update_focus();
        state
    }

    /// Fill the form with an expense being edited
    pub fn load(&mut self, form: &ExpenseForm) {
        self.name_input.set_value(form.name.clone());
        self.amount_input.set_value(form.amount.clone());
        self.currency_input.set_value(form.currency.clone());
        self.category.select(&form.category);
        self.month.select(&form.month);
        self.is_edit = true;
        self.set_focus(ExpenseField::Name);
    }

    /// Current field values
    pub fn to_form(&self) -> ExpenseForm {
        ExpenseForm::new(
            self.name_input.value(),
            self.amount_input.value(),
            self.currency_input.value(),
            self.category.value(),
            self.month.value(),
        )
    }

    /// Clear name and amount, leave edit mode and return to the first field
    pub fn reset_after_submit(&mut self) {
        let mut form = self.to_form();
        form.clear_name_and_amount();
        self.name_input.set_value(form.name);
        self.amount_input.set_value(form.amount);
        self.is_edit = false;
        self.set_focus(ExpenseField::Name);
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == ExpenseField::Name;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.currency_input.focused = self.focused_field == ExpenseField::Currency;
    }

    /// The focused text input, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Name => Some(&mut self.name_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Currency => Some(&mut self.currency_input),
            ExpenseField::Category | ExpenseField::Month => None,
        }
    }

    /// The focused choice field, if any
    pub fn focused_choice(&mut self) -> Option<&mut ChoiceField> {
        match self.focused_field {
            ExpenseField::Category => Some(&mut self.category),
            ExpenseField::Month => Some(&mut self.month),
            _ => None,
        }
    }
}

/// Render the form panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel_focused = app.focused_panel == FocusedPanel::Form;
    let form = &app.expense_form;

    let (title, color) = if form.is_edit {
        (" Edit Expense ", Color::Magenta)
    } else {
        (" Add Expense ", Color::Cyan)
    };

    let border_color = if panel_focused { color } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Currency
            Constraint::Length(1), // Category
            Constraint::Length(1), // Month
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    let show_cursor = |input: &TextInput| {
        let mut input = input.clone();
        input.focused &= panel_focused;
        input
    };

    frame.render_widget(&show_cursor(&form.name_input), chunks[0]);
    frame.render_widget(&show_cursor(&form.amount_input), chunks[1]);
    frame.render_widget(&show_cursor(&form.currency_input), chunks[2]);

    let category = match form.category.value() {
        "" => "(none)",
        value => value,
    };
    render_choice(
        frame,
        chunks[3],
        "Category",
        category,
        panel_focused && form.focused_field == ExpenseField::Category,
    );
    render_choice(
        frame,
        chunks[4],
        "Month",
        form.month.value(),
        panel_focused && form.focused_field == ExpenseField::Month,
    );

    let submit_label = if form.is_edit { " Update  " } else { " Add  " };
    let mut hints = vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(submit_label),
        Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Field  "),
    ];
    if form.is_edit {
        hints.push(Span::styled("[Esc]", Style::default().fg(Color::Red)));
        hints.push(Span::raw(" Cancel edit"));
    }
    frame.render_widget(Paragraph::new(Line::from(hints)), chunks[6]);
}

fn render_choice(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>10}: ", label), label_style)];
    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults() {
        let state = ExpenseFormState::new(&Settings::default());
        let form = state.to_form();

        assert_eq!(form.currency, "INR");
        assert_eq!(form.category, "");
        assert_eq!(form.month, current_month());
        assert!(!state.is_edit);
    }

    #[test]
    fn test_choice_cycles_and_wraps() {
        let mut choice = ChoiceField::new(vec!["a".into(), "b".into()], "b");
        choice.cycle_next();
        assert_eq!(choice.value(), "a");
        choice.cycle_prev();
        assert_eq!(choice.value(), "b");
    }

    #[test]
    fn test_unknown_choice_is_kept() {
        let mut choice = ChoiceField::new(vec!["Food".into()], "Food");
        choice.select("Gifts");
        assert_eq!(choice.value(), "Gifts");
    }

    #[test]
    fn test_load_and_reset() {
        let mut state = ExpenseFormState::new(&Settings::default());
        state.load(&ExpenseForm::new("Coffee", "5.00", "USD", "Food", "Jan"));

        assert!(state.is_edit);
        assert_eq!(
            state.to_form(),
            ExpenseForm::new("Coffee", "5.00", "USD", "Food", "Jan")
        );

        state.reset_after_submit();
        let form = state.to_form();
        assert!(!state.is_edit);
        assert!(form.name.is_empty());
        assert!(form.amount.is_empty());
        assert_eq!(form.currency, "USD");
        assert_eq!(form.month, "Jan");
    }

    #[test]
    fn test_field_navigation() {
        let mut state = ExpenseFormState::new(&Settings::default());
        state.prev_field();
        assert_eq!(state.focused_field, ExpenseField::Month);
        assert!(state.focused_input().is_none());
        assert!(state.focused_choice().is_some());

        state.next_field();
        assert!(state.name_input.focused);
    }
}
