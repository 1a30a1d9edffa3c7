//! Income/expense summary for a period
//!
//! Aggregates the transactions of a ledger that fall inside an inclusive
//! range into income and expense totals plus a signed per-category
//! breakdown.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::BudgetResult;
use crate::ledger::{sort_chronologically, Ledger};
use crate::models::{Money, Period, Timestamp, Transaction};

/// Signed total of one category within a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    /// Negative for categories dominated by expenses
    pub total: Money,
}

/// Aggregated view of a period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Sum of non-negative amounts
    pub total_income: Money,
    /// Magnitude of the sum of negative amounts
    pub total_expenses: Money,
    /// `total_income - total_expenses`
    pub net_balance: Money,
    /// Per-category signed totals in first-seen chronological order.
    /// Categories whose total is exactly zero are left out.
    pub by_category: Vec<CategoryTotal>,
}

impl Summary {
    /// Signed total for a category, if it appears in the breakdown
    pub fn category_total(&self, category: &str) -> Option<Money> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// True when the period contained no income and no expenses
    pub fn is_empty(&self) -> bool {
        self.total_income.is_zero() && self.total_expenses.is_zero() && self.by_category.is_empty()
    }

    fn from_transactions(transactions: &[&Transaction]) -> BudgetResult<Self> {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for txn in transactions {
            if txn.is_income() {
                total_income = total_income.try_add(txn.amount())?;
            } else {
                total_expenses = total_expenses.try_add(txn.amount().abs())?;
            }

            let slot = *index.entry(txn.category()).or_insert_with(|| {
                by_category.push(CategoryTotal {
                    category: txn.category().to_string(),
                    total: Money::zero(),
                });
                by_category.len() - 1
            });
            let entry = &mut by_category[slot];
            entry.total = entry.total.try_add(txn.amount())?;
        }

        by_category.retain(|c| !c.total.is_zero());

        Ok(Self {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            by_category,
        })
    }
}

/// Summarize every transaction with `start <= timestamp <= end`
///
/// Fails with a validation error if `start > end` or a total overflows.
pub fn summary_by_range(
    ledger: &Ledger,
    start: Timestamp,
    end: Timestamp,
) -> BudgetResult<Summary> {
    let mut transactions = ledger.filter_by_range(start, end)?;
    sort_chronologically(&mut transactions);

    let summary = Summary::from_transactions(&transactions)?;
    debug!(
        %start,
        %end,
        matched = transactions.len(),
        categories = summary.by_category.len(),
        "summary generated"
    );
    Ok(summary)
}

/// Summarize a calendar year (`Y-01-01T00:00:00` to `Y-12-31T23:59:59`)
pub fn summary_by_year(ledger: &Ledger, year: i32) -> BudgetResult<Summary> {
    let (start, end) = Timestamp::year_bounds(year)?;
    summary_by_range(ledger, start, end)
}

/// Summarize a calendar month
///
/// Fails with a validation error if `month` is outside 1-12.
pub fn summary_by_month(ledger: &Ledger, year: i32, month: u32) -> BudgetResult<Summary> {
    let (start, end) = Timestamp::month_bounds(year, month)?;
    summary_by_range(ledger, start, end)
}

/// Summarize any period selector
pub fn summarize(ledger: &Ledger, period: &Period) -> BudgetResult<Summary> {
    match period {
        Period::Year(year) => summary_by_year(ledger, *year),
        Period::Month { year, month } => summary_by_month(ledger, *year, *month),
        Period::Range { start, end } => summary_by_range(ledger, *start, *end),
    }
}
