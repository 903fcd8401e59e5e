//! Synchronous key-value store backed by a single JSON file
//!
//! Behaves like browser local storage: string keys, JSON values, and every
//! write is flushed to disk before the call returns.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::ExpenseError;

use super::file_io::{load_or_default, save_atomic, JsonFile};

/// File-backed key-value store
pub struct LocalStore {
    path: PathBuf,
    data: RwLock<BTreeMap<String, Value>>,
}

impl LocalStore {
    /// Create a store bound to `path`; nothing is read until [`LocalStore::load`]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all entries from disk, replacing what is in memory
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: BTreeMap<String, Value> = load_or_default(&self.path, JsonFile::LocalStorage)?;

        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data;

        Ok(())
    }

    fn save(&self, data: &BTreeMap<String, Value>) -> Result<(), ExpenseError> {
        save_atomic(&self.path, JsonFile::LocalStorage, data)
    }

    /// Get the value stored under `key`
    pub fn get_item(&self, key: &str) -> Result<Option<Value>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(key).cloned())
    }

    /// Store `value` under `key`, overwriting any previous value
    pub fn set_item(&self, key: &str, value: Value) -> Result<(), ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(key.to_string(), value);
        self.save(&data)
    }

    /// Remove `key`; returns whether it was present
    pub fn remove_item(&self, key: &str) -> Result<bool, ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.remove(key).is_some() {
            self.save(&data)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Whether a value is stored under `key`
    pub fn contains_key(&self, key: &str) -> Result<bool, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.contains_key(key))
    }

    /// All keys in sorted order
    pub fn keys(&self) -> Result<Vec<String>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.keys().cloned().collect())
    }
}
