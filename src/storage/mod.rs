//! Storage layer for budgetmgr
//!
//! Two interchangeable strategies behind the [`Store`] trait: flat JSON
//! files and a SQLite database. A command loads everything once, works on
//! the in-memory ledger, and pushes each change back through the store.

pub mod file_io;
pub mod json;
pub mod sqlite;

pub use file_io::{read_json, write_json_atomic};
pub use json::JsonStore;
pub use sqlite::SqliteStore;

use tracing::debug;

use crate::config::{BudgetPaths, StorageBackend};
use crate::error::BudgetResult;
use crate::ledger::Ledger;
use crate::models::{Budget, BudgetBook, Transaction, TransactionId};

/// Load/save contract shared by every persistence strategy
pub trait Store {
    /// Which strategy this is
    fn backend(&self) -> StorageBackend;

    fn load_all_transactions(&self) -> BudgetResult<Vec<Transaction>>;

    fn load_all_budgets(&self) -> BudgetResult<Vec<Budget>>;

    /// Lowest id that has never been persisted
    fn load_id_counter(&self) -> BudgetResult<TransactionId>;

    /// Insert or replace a transaction by id
    fn save_transaction(&mut self, transaction: &Transaction) -> BudgetResult<()>;

    /// Fails with NotFound if the id is absent
    fn delete_transaction(&mut self, id: TransactionId) -> BudgetResult<()>;

    /// Insert or replace the budget for its category
    fn save_budget(&mut self, budget: &Budget) -> BudgetResult<()>;

    /// Fails with NotFound if no budget exists for the category
    fn delete_budget(&mut self, category: &str) -> BudgetResult<()>;

    /// Build a ledger from everything persisted
    fn load_ledger(&self) -> BudgetResult<Ledger> {
        let transactions = self.load_all_transactions()?;
        let id_floor = self.load_id_counter()?;
        Ledger::from_transactions(transactions, id_floor)
    }

    fn load_budget_book(&self) -> BudgetResult<BudgetBook> {
        Ok(BudgetBook::from_budgets(self.load_all_budgets()?))
    }
}

/// Open the store for the chosen backend
///
/// Creates the data directory if needed. The two backends never fall back
/// to each other.
pub fn open_store(paths: &BudgetPaths, backend: StorageBackend) -> BudgetResult<Box<dyn Store>> {
    paths.ensure_directories()?;
    debug!(%backend, base = %paths.base_dir().display(), "opening store");

    let store: Box<dyn Store> = match backend {
        StorageBackend::Json => Box::new(JsonStore::from_paths(paths)),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(paths.database_file())?),
    };
    Ok(store)
}
