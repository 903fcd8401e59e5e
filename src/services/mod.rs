//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! session resolution, form validation, and expense mutations with
//! persistence and audit logging.

pub mod expense;
pub mod form;
pub mod session;

pub use expense::{ExpenseService, SubmitOutcome};
pub use form::ExpenseForm;
pub use session::{Session, SessionService, UserSummary, UserType};
