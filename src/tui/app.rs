//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! which screen is showing, the active session and the form contents.

use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::models::ExpenseId;
use crate::reports::MonthlySummary;
use crate::services::{ExpenseService, Session, SessionService, SubmitOutcome, UserType};
use crate::storage::Storage;

use super::views::expense_form::ExpenseFormState;
use super::widgets::{ErrorInfo, Notification, NotificationQueue, TextInput};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// User type choice and username entry
    #[default]
    Welcome,
    /// Form, grouped list and total for the active session
    Tracker,
}

/// Which panel of the tracker screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Form,
    List,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmDelete(ExpenseId),
    Alert(ErrorInfo),
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current screen
    pub screen: Screen,

    /// User type chosen on the welcome screen; reveals the username input
    pub user_type: Option<UserType>,

    /// Username input on the welcome screen
    pub username_input: TextInput,

    /// Active session once a user has been resolved
    pub session: Option<Session>,

    /// Expense form state
    pub expense_form: ExpenseFormState,

    /// Which tracker panel is focused
    pub focused_panel: FocusedPanel,

    /// Selected row in display order (month groups flattened)
    pub selected_row: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            screen: Screen::default(),
            user_type: None,
            username_input: TextInput::new().label("Your name").placeholder("Enter your name"),
            session: None,
            expense_form: ExpenseFormState::new(settings),
            focused_panel: FocusedPanel::default(),
            selected_row: 0,
            active_dialog: ActiveDialog::default(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Show an error in the alert dialog
    pub fn show_error(&mut self, error: &ExpenseError) {
        self.open_dialog(ActiveDialog::Alert(ErrorInfo::from_error(error)));
    }

    /// Show a toast notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Choose new or existing user and reveal the username input
    pub fn choose_user_type(&mut self, user_type: UserType) {
        self.user_type = Some(user_type);
        self.username_input.clear();
        self.username_input.focused = true;
    }

    /// Hide the username input again
    pub fn clear_user_type(&mut self) {
        self.user_type = None;
        self.username_input.focused = false;
    }

    /// Resolve the entered username and switch to the tracker screen
    ///
    /// On failure the welcome screen stays up with an alert.
    pub fn start_session(&mut self) {
        let Some(user_type) = self.user_type else {
            return;
        };

        match SessionService::new(self.storage).start(self.username_input.value(), user_type) {
            Ok(session) => {
                self.notify(Notification::info(format!("Welcome, {}!", session.username())));
                self.session = Some(session);
                self.screen = Screen::Tracker;
                self.expense_form = ExpenseFormState::new(self.settings);
                self.focused_panel = FocusedPanel::Form;
                self.selected_row = 0;
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Leave the tracker and return to the welcome screen
    pub fn back_to_welcome(&mut self) {
        self.session = None;
        self.screen = Screen::Welcome;
        self.clear_user_type();
        self.username_input.clear();
        self.close_dialog();
    }

    /// Month-grouped view of the session's expenses
    pub fn summary(&self) -> MonthlySummary {
        let expenses = self.session.as_ref().map(Session::expenses).unwrap_or(&[]);
        MonthlySummary::generate(expenses)
    }

    /// Number of expense rows in the list
    pub fn row_count(&self) -> usize {
        self.session.as_ref().map(Session::len).unwrap_or(0)
    }

    /// Id of the expense under the list selection
    pub fn selected_expense(&self) -> Option<ExpenseId> {
        self.summary().rows().nth(self.selected_row).map(|row| row.id)
    }

    /// Move selection up in the list
    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move selection down in the list
    pub fn move_down(&mut self) {
        if self.selected_row + 1 < self.row_count() {
            self.selected_row += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_row = self.selected_row.min(self.row_count().saturating_sub(1));
    }

    /// Toggle focus between form and list
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Form => FocusedPanel::List,
            FocusedPanel::List => FocusedPanel::Form,
        };
    }

    /// Add or update an expense from the form contents
    pub fn submit_form(&mut self) {
        let form = self.expense_form.to_form();
        let service = ExpenseService::new(self.storage, self.settings);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match service.submit(session, &form) {
            Ok(outcome) => {
                let message = match &outcome {
                    SubmitOutcome::Added(e) => format!("Added {}", e.name),
                    SubmitOutcome::Updated(e) => format!("Updated {}", e.name),
                };
                self.expense_form.reset_after_submit();
                self.notify(Notification::success(message));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Load the selected expense into the form for editing
    pub fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_expense() else {
            return;
        };
        let service = ExpenseService::new(self.storage, self.settings);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let result = service
            .position_of(session, id)
            .and_then(|position| service.begin_edit(session, position));

        match result {
            Ok(form) => {
                self.expense_form.load(&form);
                self.focused_panel = FocusedPanel::Form;
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Leave edit mode and clear the form
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.cancel_edit();
        }
        if self.expense_form.is_edit {
            self.expense_form.reset_after_submit();
            self.notify(Notification::info("Edit cancelled"));
        }
    }

    /// Ask to delete the selected expense, or delete it right away when
    /// confirmation is turned off
    pub fn request_delete_selected(&mut self) {
        let Some(id) = self.selected_expense() else {
            return;
        };

        if self.settings.confirm_delete {
            self.open_dialog(ActiveDialog::ConfirmDelete(id));
        } else {
            self.delete_expense(id);
        }
    }

    /// Delete the expense with `id`
    pub fn delete_expense(&mut self, id: ExpenseId) {
        self.close_dialog();

        let service = ExpenseService::new(self.storage, self.settings);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let was_editing = session.edit_target() == Some(id);

        let result = service
            .position_of(session, id)
            .and_then(|position| service.delete(session, position));

        match result {
            Ok(removed) => {
                if was_editing {
                    self.expense_form.reset_after_submit();
                }
                self.clamp_selection();
                self.notify(Notification::success(format!("Deleted {}", removed.name)));
            }
            Err(e) => self.show_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{Expense, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn start(app: &mut App, name: &str, user_type: UserType) {
        app.choose_user_type(user_type);
        app.username_input.set_value(name);
        app.start_session();
    }

    fn fill_form(app: &mut App, name: &str, amount: &str, month: &str) {
        app.expense_form.name_input.set_value(name);
        app.expense_form.amount_input.set_value(amount);
        app.expense_form.month.select(month);
    }

    #[test]
    fn test_new_user_opens_tracker() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        start(&mut app, "Alice", UserType::New);

        assert_eq!(app.screen, Screen::Tracker);
        assert_eq!(app.session.as_ref().unwrap().username(), "Alice");
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_missing_existing_user_shows_alert() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        start(&mut app, "Bob", UserType::Existing);

        assert_eq!(app.screen, Screen::Welcome);
        assert!(app.session.is_none());
        match &app.active_dialog {
            ActiveDialog::Alert(info) => assert_eq!(
                info.details,
                "User doesn't exist. Please check the name or create a new user."
            ),
            other => panic!("unexpected dialog: {:?}", other),
        }
    }

    #[test]
    fn test_empty_username_shows_alert() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        start(&mut app, "  ", UserType::New);

        assert_eq!(app.screen, Screen::Welcome);
        assert!(matches!(
            &app.active_dialog,
            ActiveDialog::Alert(info) if info.details == "Please enter your name."
        ));
    }

    #[test]
    fn test_submit_adds_expense_and_clears_name_and_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        start(&mut app, "Alice", UserType::New);

        fill_form(&mut app, "Coffee", "5", "January");
        app.expense_form.currency_input.set_value("USD");
        app.submit_form();

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.total(), Money::from_cents(500));
        assert!(app.expense_form.name_input.value().is_empty());
        assert_eq!(app.expense_form.currency_input.value(), "USD");
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn test_submit_missing_fields_shows_alert() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        start(&mut app, "Alice", UserType::New);

        app.submit_form();

        assert!(matches!(
            &app.active_dialog,
            ActiveDialog::Alert(info) if info.details == "Please fill in all the fields."
        ));
        assert_eq!(app.row_count(), 0);
    }

    #[test]
    fn test_selection_follows_display_order() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        storage
            .users
            .put(
                "Alice",
                &[
                    Expense::new("A", Money::from_cents(100), "INR", "", "March"),
                    Expense::new("B", Money::from_cents(100), "INR", "", "May"),
                    Expense::new("C", Money::from_cents(100), "INR", "", "March"),
                ],
            )
            .unwrap();
        start(&mut app, "Alice", UserType::Existing);

        app.move_down();
        let selected = app.selected_expense().unwrap();
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.expenses()[2].id, selected);

        app.move_down();
        app.move_down();
        assert_eq!(app.selected_row, 2);
    }

    #[test]
    fn test_edit_selected_then_submit_updates_in_place() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        start(&mut app, "Alice", UserType::New);
        fill_form(&mut app, "Coffee", "5", "January");
        app.submit_form();
        fill_form(&mut app, "Tea", "2", "January");
        app.submit_form();

        app.move_down();
        app.begin_edit_selected();
        assert!(app.expense_form.is_edit);
        assert_eq!(app.expense_form.name_input.value(), "Tea");

        app.expense_form.amount_input.set_value("3");
        app.submit_form();

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.expenses()[0].amount, Money::from_cents(500));
        assert_eq!(session.expenses()[1].amount, Money::from_cents(300));
        assert!(!app.expense_form.is_edit);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        start(&mut app, "Alice", UserType::New);
        fill_form(&mut app, "Coffee", "5", "January");
        app.submit_form();

        app.request_delete_selected();
        let ActiveDialog::ConfirmDelete(id) = app.active_dialog.clone() else {
            panic!("expected confirmation dialog");
        };
        assert_eq!(app.row_count(), 1);

        app.delete_expense(id);
        assert_eq!(app.row_count(), 0);
        assert!(!app.has_dialog());
        assert_eq!(storage.users.get("Alice").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_deleting_edited_expense_resets_form() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            confirm_delete: false,
            ..Settings::default()
        };
        let mut app = App::new(&storage, &settings);
        start(&mut app, "Alice", UserType::New);
        fill_form(&mut app, "Coffee", "5", "January");
        app.submit_form();

        app.begin_edit_selected();
        app.request_delete_selected();

        assert_eq!(app.row_count(), 0);
        assert!(!app.expense_form.is_edit);
        assert_eq!(app.session.as_ref().unwrap().edit_target(), None);
    }

    #[test]
    fn test_back_to_welcome() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        start(&mut app, "Alice", UserType::New);

        app.back_to_welcome();

        assert_eq!(app.screen, Screen::Welcome);
        assert!(app.session.is_none());
        assert!(app.user_type.is_none());
    }
}
