//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger, reports and storage.
//! Each handler loads what it needs from the store, works in memory,
//! and writes changes back before returning.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_chart, handle_summary, ChartArgs, PeriodArgs, SummaryArgs};
pub use transaction::{handle_add, handle_balance, handle_list, handle_remove, AddArgs, ListArgs};

use crate::error::BudgetError;

/// Process exit code for an error kind
pub fn exit_code(err: &BudgetError) -> u8 {
    match err {
        BudgetError::Validation(_) => 3,
        BudgetError::Format(_) => 4,
        BudgetError::NotFound { .. } => 5,
        BudgetError::Io(_) | BudgetError::Export(_) => 6,
        BudgetError::Storage(_)
        | BudgetError::Json(_)
        | BudgetError::Yaml(_)
        | BudgetError::Duplicate { .. } => 7,
        BudgetError::Config(_) => 8,
    }
}

/// Suggestion printed under the error message
pub fn hint(err: &BudgetError) -> Option<&'static str> {
    match err {
        BudgetError::Format(_) => Some(
            "Timestamps are YYYY-MM-DDThh:mm:ss, amounts look like 12.50 or -12.50, \
             periods are 2025, 2025-05 or START..END",
        ),
        BudgetError::Validation(_) => {
            Some("Check that dates exist, ranges run forward and budget limits are positive")
        }
        BudgetError::NotFound { .. } => {
            Some("Run 'budgetmgr list' or 'budgetmgr budget list' to see what exists")
        }
        BudgetError::Io(_) => Some("Check that the target directory exists and is writable"),
        BudgetError::Storage(_) | BudgetError::Duplicate { .. } => {
            Some("The data files may be damaged; run 'budgetmgr config' to locate them")
        }
        _ => None,
    }
}
