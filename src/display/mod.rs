//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI layer.

pub mod budget;
pub mod chart;
pub mod summary;
pub mod transaction;

pub use budget::{format_budget_list, format_budget_status, format_budget_warning};
pub use chart::{format_chart, format_range_chart, ChartData, NO_DATA_MESSAGE};
pub use summary::{format_balance, format_summary};
pub use transaction::{format_added, format_transaction_table};
