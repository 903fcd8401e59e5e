//! Expense Tracker - terminal-based personal expense tracking
//!
//! This library provides the core functionality for the expense tracker:
//! per-user expense lists with add, edit and delete, a month-grouped view
//! and a running total. Data for every user lives in one JSON map keyed by
//! username.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, months)
//! - `storage`: JSON file storage layer
//! - `services`: Session and expense operations
//! - `reports`: Month-grouped summary and total line
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting helpers
//! - `cli`: Command-line handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::services::{SessionService, UserType};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let session = SessionService::new(&storage).start("Alice", UserType::New)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
