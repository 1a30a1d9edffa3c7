//! Flat-file storage strategy
//!
//! Transactions live in `transactions.json` together with the id counter,
//! budgets in `budgets.json`. Every write rewrites the whole file atomically.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::file_io::{read_json, write_json_atomic};
use super::Store;
use crate::config::{BudgetPaths, StorageBackend};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Transaction, TransactionId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default)]
    next_id: TransactionId,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonStore {
    transactions_path: PathBuf,
    budgets_path: PathBuf,
}

impl JsonStore {
    pub fn new(transactions_path: PathBuf, budgets_path: PathBuf) -> Self {
        Self {
            transactions_path,
            budgets_path,
        }
    }

    /// Store at the standard locations under the data directory
    pub fn from_paths(paths: &BudgetPaths) -> Self {
        Self::new(paths.transactions_file(), paths.budgets_file())
    }

    fn read_transactions(&self) -> BudgetResult<TransactionData> {
        read_json(&self.transactions_path)
    }

    fn read_budgets(&self) -> BudgetResult<BudgetData> {
        read_json(&self.budgets_path)
    }
}

impl Store for JsonStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Json
    }

    fn load_all_transactions(&self) -> BudgetResult<Vec<Transaction>> {
        Ok(self.read_transactions()?.transactions)
    }

    fn load_all_budgets(&self) -> BudgetResult<Vec<Budget>> {
        let budgets = self.read_budgets()?.budgets;
        for budget in &budgets {
            budget.validate()?;
        }
        Ok(budgets)
    }

    fn load_id_counter(&self) -> BudgetResult<TransactionId> {
        Ok(self.read_transactions()?.next_id)
    }

    fn save_transaction(&mut self, transaction: &Transaction) -> BudgetResult<()> {
        let mut data = self.read_transactions()?;

        match data
            .transactions
            .iter_mut()
            .find(|t| t.id() == transaction.id())
        {
            Some(existing) => *existing = transaction.clone(),
            None => data.transactions.push(transaction.clone()),
        }
        data.transactions.sort_by_key(|t| t.id());
        data.next_id = data.next_id.max(transaction.id().next()?);

        write_json_atomic(&self.transactions_path, &data)?;
        info!(
            id = %transaction.id(),
            path = %self.transactions_path.display(),
            "transaction saved"
        );
        Ok(())
    }

    fn delete_transaction(&mut self, id: TransactionId) -> BudgetResult<()> {
        let mut data = self.read_transactions()?;

        let before = data.transactions.len();
        data.transactions.retain(|t| t.id() != id);
        if data.transactions.len() == before {
            return Err(BudgetError::transaction_not_found(id.to_string()));
        }

        write_json_atomic(&self.transactions_path, &data)?;
        info!(id = %id, "transaction deleted");
        Ok(())
    }

    fn save_budget(&mut self, budget: &Budget) -> BudgetResult<()> {
        let mut data = self.read_budgets()?;

        match data
            .budgets
            .iter_mut()
            .find(|b| b.category() == budget.category())
        {
            Some(existing) => *existing = budget.clone(),
            None => data.budgets.push(budget.clone()),
        }

        write_json_atomic(&self.budgets_path, &data)?;
        info!(category = budget.category(), "budget saved");
        Ok(())
    }

    fn delete_budget(&mut self, category: &str) -> BudgetResult<()> {
        let mut data = self.read_budgets()?;

        let before = data.budgets.len();
        data.budgets.retain(|b| b.category() != category);
        if data.budgets.len() == before {
            return Err(BudgetError::budget_not_found(category));
        }

        write_json_atomic(&self.budgets_path, &data)?;
        info!(category, "budget deleted");
        Ok(())
    }
}
