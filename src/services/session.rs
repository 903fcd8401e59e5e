//! Session service
//!
//! Resolves a username to the active session: a fresh empty list for a new
//! user, or the stored list for an existing one.

use std::fmt;
use std::str::FromStr;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

use super::form::ExpenseForm;

/// Whether the username should be created or looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    /// Start with an empty list, replacing anything stored under the name
    New,
    /// Load the list stored under the name
    Existing,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Existing => write!(f, "existing"),
        }
    }
}

impl FromStr for UserType {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "existing" => Ok(Self::Existing),
            other => Err(ExpenseError::Validation(format!(
                "Unknown user type '{}'. Use 'new' or 'existing'.",
                other
            ))),
        }
    }
}

/// The active user and their expenses
#[derive(Debug, Clone)]
pub struct Session {
    username: String,
    expenses: Vec<Expense>,
    edit_target: Option<ExpenseId>,
}

impl Session {
    /// Create a session over an already-loaded list
    pub fn new(username: impl Into<String>, expenses: Vec<Expense>) -> Self {
        Self {
            username: username.into(),
            expenses,
            edit_target: None,
        }
    }

    /// The session's username (also its storage key)
    pub fn username(&self) -> &str {
        &self.username
    }

    /// All expenses in list order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub(crate) fn expenses_mut(&mut self) -> &mut Vec<Expense> {
        &mut self.expenses
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the session has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Expense at a zero-based position
    pub fn get(&self, position: usize) -> Option<&Expense> {
        self.expenses.get(position)
    }

    /// Current position of the expense with `id`
    pub fn position_of(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Sum of every amount in the list
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Resolve a user-supplied reference to a zero-based position
    ///
    /// Accepts a 1-based list position (`"2"`) or an expense id in full or
    /// short (`exp-1a2b3c4d`) form.
    pub fn resolve(&self, reference: &str) -> ExpenseResult<usize> {
        let reference = reference.trim();

        if let Ok(number) = reference.parse::<usize>() {
            return match number {
                n if n >= 1 && n <= self.expenses.len() => Ok(n - 1),
                _ => Err(ExpenseError::expense_not_found(reference)),
            };
        }

        self.expenses
            .iter()
            .position(|e| e.id.matches(reference))
            .ok_or_else(|| ExpenseError::expense_not_found(reference))
    }

    /// The expense currently loaded into the form for editing, if any
    pub fn edit_target(&self) -> Option<ExpenseId> {
        self.edit_target
    }

    /// Mark the expense at `position` as being edited and return a form
    /// pre-filled with its values
    pub fn begin_edit(&mut self, position: usize) -> ExpenseResult<ExpenseForm> {
        let expense = self
            .expenses
            .get(position)
            .ok_or_else(|| ExpenseError::expense_not_found((position + 1).to_string()))?;

        self.edit_target = Some(expense.id);
        Ok(ExpenseForm::from_expense(expense))
    }

    /// Leave edit mode without changing anything
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
    }
}

/// Summary of one stored user
#[derive(Debug, Clone)]
pub struct UserSummary {
    pub username: String,
    pub expense_count: usize,
    pub total: Money,
}

/// Service for resolving and managing users
pub struct SessionService<'a> {
    storage: &'a Storage,
}

impl<'a> SessionService<'a> {
    /// Create a new session service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Start a session for `username`
    ///
    /// The username is trimmed; an empty name is rejected. A new user gets an
    /// empty list stored under the name (silently replacing existing data).
    /// An existing user must already be stored.
    pub fn start(&self, username: &str, user_type: UserType) -> ExpenseResult<Session> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ExpenseError::Validation("Please enter your name.".into()));
        }

        match user_type {
            UserType::New => self.create_user(username),
            UserType::Existing => self.open_user(username),
        }
    }

    fn create_user(&self, username: &str) -> ExpenseResult<Session> {
        let previous = self.storage.users.get(username).ok().flatten();

        self.storage.users.put(username, &[])?;

        match previous {
            Some(before) => self.storage.log_update(
                EntityType::User,
                username,
                None,
                &before,
                &Vec::new(),
                Some(format!("reset: {} expenses discarded", before.len())),
            )?,
            None => self.storage.log_create(
                EntityType::User,
                username,
                None,
                &Vec::<Expense>::new(),
            )?,
        }

        Ok(Session::new(username, Vec::new()))
    }

    fn open_user(&self, username: &str) -> ExpenseResult<Session> {
        let expenses = self
            .storage
            .users
            .get(username)?
            .ok_or_else(|| ExpenseError::user_not_found(username))?;

        Ok(Session::new(username, expenses))
    }

    /// Whether `username` has stored data
    pub fn user_exists(&self, username: &str) -> ExpenseResult<bool> {
        self.storage.users.exists(username.trim())
    }

    /// Summaries of every stored user, sorted by name
    pub fn list_users(&self) -> ExpenseResult<Vec<UserSummary>> {
        let mut summaries = Vec::new();

        for username in self.storage.users.usernames()? {
            let expenses = self.storage.users.get(&username)?.unwrap_or_default();
            summaries.push(UserSummary {
                expense_count: expenses.len(),
                total: expenses.iter().map(|e| e.amount).sum(),
                username,
            });
        }

        Ok(summaries)
    }

    /// Remove a user and all of their expenses
    pub fn remove_user(&self, username: &str) -> ExpenseResult<()> {
        let username = username.trim();
        let expenses = self
            .storage
            .users
            .get(username)?
            .ok_or_else(|| ExpenseError::user_not_found(username))?;

        self.storage.users.remove(username)?;
        self.storage
            .log_delete(EntityType::User, username, None, &expenses)?;

        Ok(())
    }
}
