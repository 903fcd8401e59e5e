//! Audit logging system for the expense tracker
//!
//! Records every create, update and delete of users and expenses with
//! before/after values in an append-only log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, entity
//!   information, and optional before/after values.
//! - `AuditLogger`: writes entries to the log file as line-delimited JSON.
//! - `generate_diff`: builds a human-readable summary of changed fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(format!("{}: {}", username, expense.name)),
//!     &expense,
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
