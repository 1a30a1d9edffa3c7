//! Core data models for budgetmgr
//!
//! Value types for the ledger domain: timestamps, amounts, transactions,
//! budgets and reporting periods.

pub mod budget;
pub mod money;
pub mod period;
pub mod timestamp;
pub mod transaction;

pub use budget::{Budget, BudgetBook};
pub use money::Money;
pub use period::Period;
pub use timestamp::Timestamp;
pub use transaction::{Transaction, TransactionId};
