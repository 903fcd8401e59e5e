//! User settings for the expense tracker
//!
//! Manages the default currency, the fixed total label, the category choices
//! offered by the expense form, and delete confirmation.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::file_io::{load_or_default, save_atomic, JsonFile};

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used when the form leaves currency empty
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Currency label printed in front of the running total
    #[serde(default = "default_currency")]
    pub total_label: String,

    /// Categories offered by the expense form
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Ask before deleting an expense
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_categories() -> Vec<String> {
    [
        "Food",
        "Transport",
        "Shopping",
        "Entertainment",
        "Bills",
        "Health",
        "Other",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            total_label: default_currency(),
            categories: default_categories(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    ///
    /// Nothing is written; the caller decides when to persist.
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        load_or_default(&paths.settings_file(), JsonFile::Settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        save_atomic(&paths.settings_file(), JsonFile::Settings, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_currency, "INR");
        assert_eq!(settings.total_label, "INR");
        assert!(settings.categories.contains(&"Food".to_string()));
        assert!(settings.confirm_delete);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_currency = "USD".into();
        settings.confirm_delete = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_currency, "USD");
        assert_eq!(loaded.total_label, "INR");
        assert!(!loaded.confirm_delete);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"total_label": "EUR"}"#).unwrap();
        assert_eq!(settings.total_label, "EUR");
        assert_eq!(settings.default_currency, "INR");
        assert_eq!(settings.categories.len(), 7);
    }

    #[test]
    fn test_blank_settings_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "").unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_currency, "INR");
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
