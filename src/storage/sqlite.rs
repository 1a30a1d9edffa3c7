//! SQLite storage strategy
//!
//! One database file holds both tables. The highest transaction id ever
//! written is tracked in `meta` so deleted ids are not handed out again.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::Store;
use crate::config::StorageBackend;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Money, Timestamp, Transaction, TransactionId};

const SCHEMA_VERSION: i64 = 1;

const NEXT_ID_KEY: &str = "next_transaction_id";

/// SQLite-backed store
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Open (and if needed create) the database at `path`
    pub fn open(path: impl AsRef<Path>) -> BudgetResult<Self> {
        let path = path.as_ref();
        let connection = Connection::open(path).map_err(|e| {
            BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "opened database");
        Self::with_connection(connection)
    }

    /// Private in-memory database
    pub fn open_in_memory() -> BudgetResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> BudgetResult<Self> {
        initialize(&connection)?;
        Ok(Self { connection })
    }
}

/// Create the tables on a fresh database and check the schema version
fn initialize(connection: &Connection) -> BudgetResult<()> {
    let version: i64 = connection.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version > SCHEMA_VERSION {
        return Err(BudgetError::Storage(format!(
            "Database schema version {} is newer than supported version {}",
            version, SCHEMA_VERSION
        )));
    }

    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY,
                timestamp TEXT NOT NULL,
                category TEXT NOT NULL,
                amount_cents INTEGER NOT NULL,
                description TEXT
            );
            CREATE TABLE IF NOT EXISTS budgets (
                category TEXT PRIMARY KEY,
                limit_cents INTEGER NOT NULL
            );
            CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value INTEGER NOT NULL
            );",
    )?;

    if version < SCHEMA_VERSION {
        connection.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }
    Ok(())
}

fn id_to_sql(id: TransactionId) -> BudgetResult<i64> {
    i64::try_from(id.value())
        .map_err(|_| BudgetError::Storage(format!("Transaction id {} is out of range", id)))
}

fn id_from_sql(raw: i64) -> BudgetResult<TransactionId> {
    u64::try_from(raw)
        .map(TransactionId::new)
        .map_err(|_| BudgetError::Storage(format!("Negative transaction id {} in database", raw)))
}

impl Store for SqliteStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Sqlite
    }

    fn load_all_transactions(&self) -> BudgetResult<Vec<Transaction>> {
        let rows = self
            .connection
            .prepare(
                "SELECT id, timestamp, category, amount_cents, description
                 FROM transactions ORDER BY id",
            )?
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, Option<String>>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, rusqlite::Error>>()?;

        rows.into_iter()
            .map(|(id, timestamp, category, cents, description)| {
                let timestamp = Timestamp::from_iso(&timestamp).map_err(|e| {
                    BudgetError::Storage(format!("Transaction {}: {}", id, e))
                })?;
                Transaction::new(
                    id_from_sql(id)?,
                    timestamp,
                    category,
                    Money::from_cents(cents),
                    description,
                )
            })
            .collect()
    }

    fn load_all_budgets(&self) -> BudgetResult<Vec<Budget>> {
        let rows = self
            .connection
            .prepare("SELECT category, limit_cents FROM budgets ORDER BY rowid")?
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<Result<Vec<_>, rusqlite::Error>>()?;

        rows.into_iter()
            .map(|(category, cents)| Budget::new(category, Money::from_cents(cents)))
            .collect()
    }

    fn load_id_counter(&self) -> BudgetResult<TransactionId> {
        let raw: Option<i64> = self
            .connection
            .query_row(
                "SELECT value FROM meta WHERE key = ?1",
                params![NEXT_ID_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(raw) => id_from_sql(raw),
            None => Ok(TransactionId::default()),
        }
    }

    fn save_transaction(&mut self, transaction: &Transaction) -> BudgetResult<()> {
        let id = id_to_sql(transaction.id())?;
        let next = id_to_sql(transaction.id().next()?)?;

        let tx = self.connection.transaction()?;
        tx.execute(
            "INSERT OR REPLACE INTO transactions (id, timestamp, category, amount_cents, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                transaction.timestamp().to_iso(),
                transaction.category(),
                transaction.amount().cents(),
                transaction.description(),
            ],
        )?;
        tx.execute(
            "INSERT INTO meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = MAX(value, excluded.value)",
            params![NEXT_ID_KEY, next],
        )?;
        tx.commit()?;

        info!(id = %transaction.id(), "transaction saved");
        Ok(())
    }

    fn delete_transaction(&mut self, id: TransactionId) -> BudgetResult<()> {
        let changed = self
            .connection
            .execute("DELETE FROM transactions WHERE id = ?1", params![id_to_sql(id)?])?;

        if changed == 0 {
            return Err(BudgetError::transaction_not_found(id.to_string()));
        }
        info!(id = %id, "transaction deleted");
        Ok(())
    }

    fn save_budget(&mut self, budget: &Budget) -> BudgetResult<()> {
        self.connection.execute(
            "INSERT INTO budgets (category, limit_cents) VALUES (?1, ?2)
             ON CONFLICT(category) DO UPDATE SET limit_cents = excluded.limit_cents",
            params![budget.category(), budget.limit().cents()],
        )?;

        info!(category = budget.category(), "budget saved");
        Ok(())
    }

    fn delete_budget(&mut self, category: &str) -> BudgetResult<()> {
        let changed = self
            .connection
            .execute("DELETE FROM budgets WHERE category = ?1", params![category])?;

        if changed == 0 {
            return Err(BudgetError::budget_not_found(category));
        }
        info!(category, "budget deleted");
        Ok(())
    }
}
