//! Reports module for budgetmgr
//!
//! Period summaries over a ledger and monthly budget checks.

pub mod budget_status;
pub mod summary;

pub use budget_status::{evaluate, evaluate_all, BudgetStatus};
pub use summary::{
    summarize, summary_by_month, summary_by_range, summary_by_year, CategoryTotal, Summary,
};
