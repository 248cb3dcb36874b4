//! Storage layer for kakeibo
//!
//! Provides JSON file storage with atomic writes behind the `ExpenseStore`
//! trait, plus an in-memory implementation of the same contract.

pub mod expenses;
pub mod file_io;
pub mod memory;

pub use expenses::{ExpenseRepository, LoadReport};
pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryExpenseStore;

use crate::config::paths::KakeiboPaths;
use crate::error::KakeiboResult;
use crate::models::{Expense, ExpenseId};

/// The persistence contract the rest of the crate depends on
///
/// The aggregation layer is pull-based and stateless: it asks for the full
/// current collection whenever it runs. Which backend sits behind the trait
/// is a deployment choice.
pub trait ExpenseStore {
    /// The full current expense set, newest date first
    fn list_expenses(&self) -> KakeiboResult<Vec<Expense>>;

    /// Add a new expense record
    fn insert(&self, expense: Expense) -> KakeiboResult<()>;

    /// Remove an expense by id, returning it if present
    fn remove(&self, id: &ExpenseId) -> KakeiboResult<Option<Expense>>;

    /// Remove every expense, returning how many were removed
    fn clear(&self) -> KakeiboResult<usize>;
}

/// Main storage coordinator owning the file-backed repository
pub struct Storage {
    paths: KakeiboPaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KakeiboPaths) -> KakeiboResult<Self> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &KakeiboPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> KakeiboResult<LoadReport> {
        self.expenses.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> KakeiboResult<()> {
        self.expenses.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.paths().expenses_file().ends_with("expenses.json"));
    }
}
