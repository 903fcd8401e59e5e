//! Export module for the expense tracker
//!
//! Exports one user's expenses in several formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_user_csv;
pub use json::{export_user_json, UserExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_user_yaml;
