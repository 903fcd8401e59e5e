//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current screen, focus and dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedPanel, Screen};
use super::event::Event;
use super::widgets::TextInput;
use crate::services::UserType;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.screen {
        Screen::Welcome => handle_welcome_key(app, key),
        Screen::Tracker => handle_tracker_key(app, key),
    }
}

/// Handle keys on the welcome screen
fn handle_welcome_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.user_type.is_some() {
        match key.code {
            KeyCode::Enter => app.start_session(),
            KeyCode::Esc => app.clear_user_type(),
            _ => edit_text(&mut app.username_input, key),
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') => app.choose_user_type(UserType::New),
        KeyCode::Char('e') | KeyCode::Char('E') => app.choose_user_type(UserType::Existing),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }

    Ok(())
}

/// Handle keys on the tracker screen
fn handle_tracker_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.toggle_panel_focus();
        return Ok(());
    }

    match app.focused_panel {
        FocusedPanel::Form => handle_form_key(app, key),
        FocusedPanel::List => handle_list_key(app, key),
    }
}

/// Handle keys when the expense form is focused
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Down => app.expense_form.next_field(),
        KeyCode::Up => app.expense_form.prev_field(),
        _ => {
            if let Some(choice) = app.expense_form.focused_choice() {
                match key.code {
                    KeyCode::Left => choice.cycle_prev(),
                    KeyCode::Right | KeyCode::Char(' ') => choice.cycle_next(),
                    _ => {}
                }
            } else if let Some(input) = app.expense_form.focused_input() {
                edit_text(input, key);
            }
        }
    }

    Ok(())
}

/// Handle keys when the expense list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_row = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_row = app.row_count().saturating_sub(1);
        }
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.cancel_edit();
            app.focused_panel = FocusedPanel::Form;
        }
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Char('b') => app.back_to_welcome(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::ConfirmDelete(id) => {
            let id = *id;
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.delete_expense(id);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.close_dialog();
                }
                _ => {}
            }
        }
        ActiveDialog::Alert(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Apply an editing key to a text input
fn edit_text(input: &mut TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use crate::storage::Storage;
    use crate::tui::views::expense_form::ExpenseField;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_welcome_flow_creates_user() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.user_type, Some(UserType::New));

        type_text(&mut app, "Alice");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Tracker);
        assert!(storage.users.exists("Alice").unwrap());
    }

    #[test]
    fn test_typing_q_in_username_does_not_quit() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "quinn");

        assert!(!app.should_quit);
        assert_eq!(app.username_input.value(), "quinn");
    }

    #[test]
    fn test_add_expense_through_form_keys() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Alice");
        press(&mut app, KeyCode::Enter);

        type_text(&mut app, "Coffee");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.expenses()[0].name, "Coffee");
        assert_eq!(session.expenses()[0].currency, "INR");
        assert_eq!(app.expense_form.focused_field, ExpenseField::Name);
    }

    #[test]
    fn test_delete_from_list_with_confirmation() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Alice");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Coffee");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.active_dialog, ActiveDialog::ConfirmDelete(_)));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.row_count(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.row_count(), 0);
    }

    #[test]
    fn test_alert_closes_on_enter() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "Nobody");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.active_dialog, ActiveDialog::Alert(_)));

        press(&mut app, KeyCode::Char('x'));
        assert!(app.has_dialog());

        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());
        assert_eq!(app.screen, Screen::Welcome);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();

        assert!(app.should_quit);
    }
}
