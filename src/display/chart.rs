//! ASCII bar chart of income and expenses per category
//!
//! Two sections, `Income` and `Expenses`. Categories are sorted by name
//! and each bar is scaled so the largest value in its section spans
//! [`BAR_WIDTH`] columns.

use std::collections::BTreeMap;

use crate::error::BudgetResult;
use crate::ledger::Ledger;
use crate::models::{Money, Timestamp, Transaction};

/// Width of the longest bar
pub const BAR_WIDTH: i64 = 40;

/// Printed instead of a chart when the range has no transactions
pub const NO_DATA_MESSAGE: &str = "No data in the specified time range.";

/// Per-category income and expense magnitudes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    pub income: BTreeMap<String, Money>,
    pub expenses: BTreeMap<String, Money>,
}

impl ChartData {
    /// Fails with a validation error if a category total overflows
    pub fn from_transactions<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
    ) -> BudgetResult<Self> {
        let mut data = Self::default();
        for txn in transactions {
            let (section, value) = if txn.is_income() {
                (&mut data.income, txn.amount())
            } else {
                (&mut data.expenses, txn.amount().abs())
            };
            let total = section.entry(txn.category().to_string()).or_default();
            *total = total.try_add(value)?;
        }
        Ok(data)
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }
}

/// Chart of the transactions in `[start, end]`
pub fn format_range_chart(
    ledger: &Ledger,
    start: Timestamp,
    end: Timestamp,
) -> BudgetResult<String> {
    let transactions = ledger.filter_by_range(start, end)?;
    Ok(format_chart(&ChartData::from_transactions(transactions)?))
}

/// Render chart data, or the no-data message when there is nothing to show
pub fn format_chart(data: &ChartData) -> String {
    if data.is_empty() {
        return format!("{}\n", NO_DATA_MESSAGE);
    }

    let mut output = String::new();
    format_section(&mut output, "Income", &data.income);
    format_section(&mut output, "Expenses", &data.expenses);
    output
}

fn format_section(output: &mut String, title: &str, values: &BTreeMap<String, Money>) {
    output.push_str(&format!("\n{}:\n", title));

    let label_width = values.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    let max_cents = values.values().map(|v| v.cents()).max().unwrap_or(0);

    for (category, value) in values {
        output.push_str(&format!(
            "{:>width$} | {} ({})\n",
            category,
            bar(value.cents(), max_cents),
            value.to_decimal_string(),
            width = label_width
        ));
    }
}

/// Bar length truncates toward zero
fn bar(cents: i64, max_cents: i64) -> String {
    if max_cents <= 0 || cents <= 0 {
        return String::new();
    }
    let len = (i128::from(cents) * i128::from(BAR_WIDTH)) / i128::from(max_cents);
    "#".repeat(len as usize)
}
