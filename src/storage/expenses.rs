//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. Loading is lenient:
//! each stored record is validated individually, and a record whose date (or
//! id) does not parse is skipped and reported rather than poisoning range
//! comparisons for the whole collection.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Expense, ExpenseId, Money, PaymentType};

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseStore;

/// Serializable expense file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseData {
    expenses: Vec<RawExpense>,
}

/// On-disk record shape with the date kept as a string until validated
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawExpense {
    id: String,
    date: String,
    description: String,
    amount: Money,
    #[serde(default, rename = "type")]
    payment: PaymentType,
}

impl RawExpense {
    fn from_expense(expense: &Expense) -> Self {
        Self {
            id: expense.id.as_uuid().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: expense.description.clone(),
            amount: expense.amount,
            payment: expense.payment,
        }
    }

    fn validate(self) -> KakeiboResult<Expense> {
        let id = ExpenseId::parse(&self.id).map_err(|e| KakeiboError::MalformedRecord {
            id: self.id.clone(),
            reason: format!("invalid id: {}", e),
        })?;

        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| {
            KakeiboError::MalformedRecord {
                id: self.id.clone(),
                reason: format!("invalid date '{}'", self.date),
            }
        })?;

        Ok(Expense {
            id,
            date,
            description: self.description,
            amount: self.amount,
            payment: self.payment,
        })
    }
}

/// Outcome of a repository load: how many records survived, and which didn't
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of records loaded successfully
    pub loaded: usize,
    /// One `MalformedRecord` error per skipped record
    pub skipped: Vec<KakeiboError>,
}

impl LoadReport {
    /// Whether any records were skipped
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, skipping malformed records
    pub fn load(&self) -> KakeiboResult<LoadReport> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut report = LoadReport::default();
        let mut expenses = Vec::with_capacity(file_data.expenses.len());
        for raw in file_data.expenses {
            match raw.validate() {
                Ok(expense) => expenses.push(expense),
                Err(err) => report.skipped.push(err),
            }
        }
        report.loaded = expenses.len();

        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = expenses;

        Ok(report)
    }

    /// Save expenses to disk, newest date first
    pub fn save(&self) -> KakeiboResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<&Expense> = data.iter().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        let file_data = ExpenseData {
            expenses: expenses.into_iter().map(RawExpense::from_expense).collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Number of expenses currently held
    pub fn len(&self) -> KakeiboResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }

    /// Whether the repository holds no expenses
    pub fn is_empty(&self) -> KakeiboResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl ExpenseStore for ExpenseRepository {
    fn list_expenses(&self) -> KakeiboResult<Vec<Expense>> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses = data.clone();
        // Stable: same-date records keep insertion order
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    fn insert(&self, expense: Expense) -> KakeiboResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.push(expense);
        Ok(())
    }

    fn remove(&self, id: &ExpenseId) -> KakeiboResult<Option<Expense>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter().position(|e| e.id == *id) {
            Some(index) => Ok(Some(data.remove(index))),
            None => Ok(None),
        }
    }

    fn clear(&self) -> KakeiboResult<usize> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let removed = data.len();
        data.clear();
        Ok(removed)
    }
}
