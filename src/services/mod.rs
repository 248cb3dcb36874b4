//! Service layer for kakeibo
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and the stats entry points.

pub mod expense;

pub use expense::{CreateExpenseInput, ExpenseService};
