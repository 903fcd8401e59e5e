//! Reading and writing the JSON files the tracker keeps on disk
//!
//! Two files are JSON: the local storage map holding every user's expenses
//! and the settings file. A missing or blank file reads as the type's
//! default, the way a fresh browser profile has empty local storage. Writes
//! go to a sibling temp file that is synced and then renamed over the target.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// Which JSON file is being read or written; decides error wording and kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFile {
    /// The key-value map of usernames to expense lists
    LocalStorage,
    /// The user's settings
    Settings,
}

impl JsonFile {
    fn io_error(self, message: String) -> ExpenseError {
        match self {
            Self::LocalStorage => ExpenseError::Storage(message),
            Self::Settings => ExpenseError::Io(message),
        }
    }

    fn corrupt_error(self, message: String) -> ExpenseError {
        match self {
            Self::LocalStorage => ExpenseError::Storage(message),
            Self::Settings => ExpenseError::Config(message),
        }
    }
}

impl fmt::Display for JsonFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalStorage => write!(f, "local storage"),
            Self::Settings => write!(f, "settings file"),
        }
    }
}

/// Load `file` from `path`, or `T::default()` when it is missing or blank
pub fn load_or_default<T>(path: &Path, file: JsonFile) -> Result<T, ExpenseError>
where
    T: DeserializeOwned + Default,
{
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(file.io_error(format!(
                "Failed to read {} at {}: {}",
                file,
                path.display(),
                e
            )))
        }
    };

    if contents.trim().is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str(&contents).map_err(|e| {
        file.corrupt_error(format!("Corrupt {} at {}: {}", file, path.display(), e))
    })
}

/// Replace `file` at `path` with `data`
///
/// Either the old or the new contents survive a crash mid-write.
pub fn save_atomic<T>(path: &Path, file: JsonFile, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
{
    let fail = |action: &str, e: &dyn fmt::Display| {
        file.io_error(format!(
            "Failed to {} {} at {}: {}",
            action,
            file,
            path.display(),
            e
        ))
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| fail("create the directory for", &e))?;
    }

    let temp_path = temp_path(path);
    let written = File::create(&temp_path)
        .map_err(|e| fail("create a temp file for", &e))
        .and_then(|handle| {
            let mut writer = BufWriter::new(handle);
            serde_json::to_writer_pretty(&mut writer, data)
                .map_err(|e| fail("serialize", &e))?;
            writer.flush().map_err(|e| fail("flush", &e))?;
            writer.get_ref().sync_all().map_err(|e| fail("sync", &e))
        })
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| fail("replace", &e)));

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

/// `local_storage.json` is staged as `local_storage.json.tmp` in the same directory
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".tmp");
    path.with_file_name(name)
}
