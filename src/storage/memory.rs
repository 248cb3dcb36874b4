//! In-memory expense store
//!
//! The second interchangeable backend behind the `ExpenseStore` contract.
//! Nothing touches disk; useful for tests and for embedding the library in a
//! host that manages its own persistence.

use std::sync::RwLock;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Expense, ExpenseId};

use super::ExpenseStore;

/// Expense store backed by process memory only
#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    data: RwLock<Vec<Expense>>,
}

impl MemoryExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with expenses
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            data: RwLock::new(expenses),
        }
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn list_expenses(&self) -> KakeiboResult<Vec<Expense>> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses = data.clone();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentType};
    use chrono::NaiveDate;

    fn sample(date: &str, description: &str) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description,
            Money::from_units(100),
            PaymentType::Cash,
        )
    }

    #[test]
    fn test_list_is_date_descending() {
        let store = MemoryExpenseStore::with_expenses(vec![
            sample("2024-03-10", "Old"),
            sample("2024-03-12", "New"),
        ]);

        let expenses = store.list_expenses().unwrap();
        assert_eq!(expenses[0].description, "New");
        assert_eq!(expenses[1].description, "Old");
    }

    #[test]
    fn test_insert_remove_clear() {
        let store = MemoryExpenseStore::new();
        let expense = sample("2024-03-10", "Coffee");
        let id = expense.id;

        store.insert(expense).unwrap();
        assert_eq!(store.list_expenses().unwrap().len(), 1);

        assert!(store.remove(&id).unwrap().is_some());
        assert!(store.remove(&id).unwrap().is_none());

        store.insert(sample("2024-03-11", "A")).unwrap();
        store.insert(sample("2024-03-12", "B")).unwrap();
        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.list_expenses().unwrap().is_empty());
    }
}
