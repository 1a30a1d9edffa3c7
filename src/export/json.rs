//! JSON export of a summary

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::BudgetResult;
use crate::reports::Summary;

/// Export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serializable form of a summary with amounts as two-decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryExport {
    pub schema_version: String,
    pub total_income: String,
    pub total_expenses: String,
    pub net_balance: String,
    /// Same order as the summary breakdown
    pub by_category: Vec<CategoryAmount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: String,
}

impl From<&Summary> for SummaryExport {
    fn from(summary: &Summary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            total_income: summary.total_income.to_decimal_string(),
            total_expenses: summary.total_expenses.to_decimal_string(),
            net_balance: summary.net_balance.to_decimal_string(),
            by_category: summary
                .by_category
                .iter()
                .map(|c| CategoryAmount {
                    category: c.category.clone(),
                    amount: c.total.to_decimal_string(),
                })
                .collect(),
        }
    }
}

/// Write a summary as pretty-printed JSON
pub fn write_summary_json<W: Write>(summary: &Summary, writer: &mut W) -> BudgetResult<()> {
    let export = SummaryExport::from(summary);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
