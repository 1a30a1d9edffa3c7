//! Budget ceiling evaluation
//!
//! Compares a category's expenses in the calendar month of a reference
//! timestamp against its budget. Pure query over the ledger.

use serde::Serialize;
use tracing::debug;

use crate::error::BudgetResult;
use crate::ledger::Ledger;
use crate::models::{Budget, BudgetBook, Money, Timestamp};

/// Outcome of checking one budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    /// Magnitude of the month's expenses in the category
    pub spent: Money,
    pub limit: Money,
    /// `spent > limit`
    pub exceeded: bool,
}

impl BudgetStatus {
    /// Amount left before the ceiling; negative once exceeded
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }
}

/// Evaluate a budget for the month containing `reference`
pub fn evaluate(
    ledger: &Ledger,
    budget: &Budget,
    reference: Timestamp,
) -> BudgetResult<BudgetStatus> {
    let (start, end) = reference.enclosing_month()?;

    let spent = Money::try_sum(
        ledger
            .filter_by_range(start, end)?
            .into_iter()
            .filter(|t| t.category() == budget.category() && t.is_expense())
            .map(|t| t.amount().abs()),
    )?;

    let status = BudgetStatus {
        category: budget.category().to_string(),
        spent,
        limit: budget.limit(),
        exceeded: spent > budget.limit(),
    };

    debug!(
        category = budget.category(),
        spent = %status.spent,
        limit = %status.limit,
        exceeded = status.exceeded,
        "budget evaluated"
    );
    Ok(status)
}

/// Evaluate every budget in the book
pub fn evaluate_all(
    ledger: &Ledger,
    budgets: &BudgetBook,
    reference: Timestamp,
) -> BudgetResult<Vec<BudgetStatus>> {
    budgets
        .iter()
        .map(|budget| evaluate(ledger, budget, reference))
        .collect()
}
