//! Core data models for kakeibo
//!
//! This module contains the data structures that represent the expense-diary
//! domain: expenses, payment types, and monetary amounts.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, PaymentType};
pub use ids::ExpenseId;
pub use money::Money;
