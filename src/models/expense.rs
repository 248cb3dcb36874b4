//! Expense model
//!
//! Represents a single dated expenditure paid in cash or by card.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// How an expense was paid
///
/// An absent or unrecognized stored value deserializes to `Cash`; records
/// written before the payment field existed stay countable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PaymentType {
    #[default]
    Cash,
    Card,
}

impl From<String> for PaymentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "card" => Self::Card,
            _ => Self::Cash,
        }
    }
}

impl PaymentType {
    /// Parse a user-supplied value, applying the cash fallback
    pub fn parse(s: &str) -> Self {
        Self::from(s.trim().to_lowercase())
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Card => write!(f, "card"),
        }
    }
}

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned when the record is created
    pub id: ExpenseId,

    /// Calendar date of the expenditure (no time component)
    pub date: NaiveDate,

    /// Free-text label; identical descriptions are merged in stats grouping
    pub description: String,

    /// Amount in whole currency units
    pub amount: Money,

    /// Payment method, defaulting to cash when absent
    #[serde(default, rename = "type")]
    pub payment: PaymentType,
}

impl Expense {
    /// Create a new expense with a fresh ID
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        payment: PaymentType,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            description: description.into(),
            amount,
            payment,
        }
    }
}
