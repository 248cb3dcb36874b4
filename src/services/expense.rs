//! Expense service
//!
//! Business logic for the expense diary: creating and deleting records,
//! per-day views, and the single aggregation entry point over whichever
//! store implementation is injected.

use chrono::NaiveDate;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Expense, Money, PaymentType};
use crate::stats::{StatsReport, StatsView};
use crate::storage::ExpenseStore;

/// Service for expense management over an injected store
pub struct ExpenseService<'a, S: ExpenseStore> {
    store: &'a S,
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub payment: PaymentType,
}

impl<'a, S: ExpenseStore> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Create a new expense record
    ///
    /// The description is trimmed and must be non-empty. The amount is taken
    /// as given: zero and negative values are accepted.
    pub fn add(&self, input: CreateExpenseInput) -> KakeiboResult<Expense> {
        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(KakeiboError::Validation(
                "Expense description cannot be empty".into(),
            ));
        }

        let expense = Expense::new(input.date, description, input.amount, input.payment);
        self.store.insert(expense.clone())?;
        Ok(expense)
    }

    /// Delete an expense by its full id or a unique short prefix
    pub fn delete(&self, id: &str) -> KakeiboResult<Expense> {
        let expenses = self.store.list_expenses()?;

        let matches: Vec<&Expense> = expenses.iter().filter(|e| e.id.matches(id)).collect();
        match matches.len() {
            0 => Err(KakeiboError::expense_not_found(id)),
            1 => {
                let found = matches[0].id;
                self.store
                    .remove(&found)?
                    .ok_or_else(|| KakeiboError::expense_not_found(id))
            }
            n => Err(KakeiboError::Validation(format!(
                "Id '{}' is ambiguous ({} matches); use more characters",
                id, n
            ))),
        }
    }

    /// Delete every expense, returning how many were removed
    pub fn clear_all(&self) -> KakeiboResult<usize> {
        self.store.clear()
    }

    /// All expenses, newest date first
    pub fn list(&self) -> KakeiboResult<Vec<Expense>> {
        self.store.list_expenses()
    }

    /// Expenses logged on exactly the given day
    pub fn daily(&self, date: NaiveDate) -> KakeiboResult<Vec<Expense>> {
        Ok(self
            .store
            .list_expenses()?
            .into_iter()
            .filter(|e| e.date == date)
            .collect())
    }

    /// Total spent on exactly the given day
    pub fn daily_total(&self, date: NaiveDate) -> KakeiboResult<Money> {
        Ok(self.daily(date)?.iter().map(|e| e.amount).sum())
    }

    /// Aggregate stats for a string-level reference date
    ///
    /// A blank reference yields the zero-value report; an unparseable one
    /// fails with `InvalidDate`.
    pub fn stats(&self, reference: &str, view: StatsView) -> KakeiboResult<StatsReport> {
        let expenses = self.store.list_expenses()?;
        StatsReport::generate(&expenses, reference, view)
    }

    /// Aggregate stats for an already-parsed reference date
    pub fn stats_for_date(&self, date: NaiveDate, view: StatsView) -> KakeiboResult<StatsReport> {
        let expenses = self.store.list_expenses()?;
        Ok(StatsReport::for_date(&expenses, date, view))
    }
}
