//! Expense service
//!
//! Add, edit and delete expenses in the active session. Every mutation
//! persists the full list and writes an audit entry.

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};
use crate::storage::Storage;

use super::form::ExpenseForm;
use super::session::Session;

/// What a form submit did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new expense was appended
    Added(Expense),
    /// The expense being edited was overwritten
    Updated(Expense),
}

impl SubmitOutcome {
    /// The expense as it now stands in the list
    pub fn expense(&self) -> &Expense {
        match self {
            Self::Added(e) | Self::Updated(e) => e,
        }
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Validate the form and append the expense to the end of the list
    pub fn add(&self, session: &mut Session, form: &ExpenseForm) -> ExpenseResult<Expense> {
        let expense = form.build(&self.settings.default_currency)?;

        session.expenses_mut().push(expense.clone());
        self.persist(session)?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(audit_label(session, &expense)),
            &expense,
        )?;

        Ok(expense)
    }

    /// Overwrite every field of the expense at `position`, keeping its id
    pub fn update(
        &self,
        session: &mut Session,
        position: usize,
        form: &ExpenseForm,
    ) -> ExpenseResult<Expense> {
        let replacement = form.build(&self.settings.default_currency)?;

        let expense = session
            .expenses_mut()
            .get_mut(position)
            .ok_or_else(|| ExpenseError::expense_not_found((position + 1).to_string()))?;

        let before = expense.clone();
        expense.overwrite_with(replacement);
        let after = expense.clone();

        self.persist(session)?;

        self.storage.log_update(
            EntityType::Expense,
            after.id.to_string(),
            Some(audit_label(session, &after)),
            &before,
            &after,
            None,
        )?;

        Ok(after)
    }

    /// Remove the expense at `position`; later expenses shift down by one
    ///
    /// Removing the expense currently being edited leaves edit mode.
    pub fn delete(&self, session: &mut Session, position: usize) -> ExpenseResult<Expense> {
        if position >= session.len() {
            return Err(ExpenseError::expense_not_found((position + 1).to_string()));
        }

        let removed = session.expenses_mut().remove(position);
        if session.edit_target() == Some(removed.id) {
            session.cancel_edit();
        }

        self.persist(session)?;

        self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(audit_label(session, &removed)),
            &removed,
        )?;

        Ok(removed)
    }

    /// Add a new expense, or update the one being edited and leave edit mode
    pub fn submit(&self, session: &mut Session, form: &ExpenseForm) -> ExpenseResult<SubmitOutcome> {
        let Some(target) = session.edit_target() else {
            return self.add(session, form).map(SubmitOutcome::Added);
        };

        let position = session
            .position_of(target)
            .ok_or_else(|| ExpenseError::expense_not_found(target.to_string()))?;

        let updated = self.update(session, position, form)?;
        session.cancel_edit();

        Ok(SubmitOutcome::Updated(updated))
    }

    /// Load the expense at `position` into a form and enter edit mode
    pub fn begin_edit(&self, session: &mut Session, position: usize) -> ExpenseResult<ExpenseForm> {
        session.begin_edit(position)
    }

    /// Leave edit mode
    pub fn cancel_edit(&self, session: &mut Session) {
        session.cancel_edit();
    }

    /// Current position of an expense id
    pub fn position_of(&self, session: &Session, id: ExpenseId) -> ExpenseResult<usize> {
        session
            .position_of(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    fn persist(&self, session: &Session) -> ExpenseResult<()> {
        self.storage.users.put(session.username(), session.expenses())
    }
}

fn audit_label(session: &Session, expense: &Expense) -> String {
    format!("{}: {}", session.username(), expense.name)
}
