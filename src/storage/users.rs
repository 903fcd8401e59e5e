//! Per-user expense lists in the local store
//!
//! Each username is a key whose value is the JSON array of that user's
//! expense records.

use std::path::PathBuf;

use crate::error::ExpenseError;
use crate::models::Expense;

use super::local_store::LocalStore;

/// Repository mapping usernames to their expense lists
pub struct UserRepository {
    store: LocalStore,
}

impl UserRepository {
    /// Create a new user repository backed by the store file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: LocalStore::new(path),
        }
    }

    /// Load the store from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        self.store.load()
    }

    /// Path of the backing store file
    pub fn path(&self) -> &PathBuf {
        self.store.path()
    }

    /// Get the stored expense list for `username`
    ///
    /// Returns `None` when the user has never been stored. A value that is not
    /// an array of expense records is reported as a JSON error. Records saved
    /// without an id are given one and written back, so ids stay stable
    /// across reads.
    pub fn get(&self, username: &str) -> Result<Option<Vec<Expense>>, ExpenseError> {
        let Some(value) = self.store.get_item(username)? else {
            return Ok(None);
        };

        let missing_ids = value
            .as_array()
            .is_some_and(|records| records.iter().any(|record| record.get("id").is_none()));

        let expenses: Vec<Expense> = serde_json::from_value(value).map_err(|e| {
            ExpenseError::Json(format!(
                "Stored expenses for '{}' are malformed: {}",
                username, e
            ))
        })?;

        if missing_ids {
            self.put(username, &expenses)?;
        }

        Ok(Some(expenses))
    }

    /// Store the full expense list for `username`
    pub fn put(&self, username: &str, expenses: &[Expense]) -> Result<(), ExpenseError> {
        let value = serde_json::to_value(expenses)?;
        self.store.set_item(username, value)
    }

    /// Remove a user and all their expenses
    pub fn remove(&self, username: &str) -> Result<bool, ExpenseError> {
        self.store.remove_item(username)
    }

    /// Whether `username` has stored data
    pub fn exists(&self, username: &str) -> Result<bool, ExpenseError> {
        self.store.contains_key(username)
    }

    /// All stored usernames in sorted order
    pub fn usernames(&self) -> Result<Vec<String>, ExpenseError> {
        self.store.keys()
    }
}
