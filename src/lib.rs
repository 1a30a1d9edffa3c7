//! budgetmgr - command-line ledger for personal finances
//!
//! Records dated, categorized income and expense transactions, summarizes
//! them over calendar periods, exports summaries, and checks monthly
//! per-category budgets.
//!
//! # Architecture
//!
//! - `models`: value types (timestamps, money, transactions, budgets, periods)
//! - `ledger`: in-memory transaction collection with queries and totals
//! - `reports`: period summaries and budget evaluation
//! - `export`: CSV, JSON and YAML summary exports
//! - `storage`: JSON-file and SQLite persistence behind one trait
//! - `config`: paths and user settings
//! - `display`: terminal formatting
//! - `cli`: command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetmgr::ledger::Ledger;
//! use budgetmgr::models::{Money, Timestamp};
//! use budgetmgr::reports::summary_by_month;
//!
//! let mut ledger = Ledger::new();
//! ledger.add(Timestamp::from_iso("2025-05-01T00:00:00")?, "salary", Money::parse("5000")?, None)?;
//! let summary = summary_by_month(&ledger, 2025, 5)?;
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetError, BudgetResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BUDGETMGR_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber once
///
/// Logs go to stderr; the filter comes from `BUDGETMGR_LOG` and defaults to
/// `warn`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
