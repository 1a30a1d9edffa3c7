//! Budget display formatting

use crate::models::BudgetBook;
use crate::reports::BudgetStatus;

/// Format the configured budgets
pub fn format_budget_list(book: &BudgetBook, currency_symbol: &str) -> String {
    if book.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let width = book
        .iter()
        .map(|b| b.category().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = format!("{:<width$}  {:>14}\n", "Category", "Monthly limit", width = width);
    output.push_str(&format!("{:-<width$}  {:->14}\n", "", "", width = width));
    for budget in book.iter() {
        output.push_str(&format!(
            "{:<width$}  {:>14}\n",
            budget.category(),
            budget.limit().format_with_symbol(currency_symbol),
            width = width
        ));
    }
    output
}

/// Format evaluated budgets with spent, limit and remaining columns
pub fn format_budget_status(statuses: &[BudgetStatus], currency_symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let width = statuses
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}  {}\n",
        "Category",
        "Spent",
        "Limit",
        "Remaining",
        "Status",
        width = width
    );
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:->12}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        width = width
    ));

    for status in statuses {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}  {}\n",
            status.category,
            status.spent.format_with_symbol(currency_symbol),
            status.limit.format_with_symbol(currency_symbol),
            status.remaining().format_with_symbol(currency_symbol),
            if status.exceeded { "OVER" } else { "ok" },
            width = width
        ));
    }
    output
}

/// Warning line printed after an add pushes a category over its limit
pub fn format_budget_warning(status: &BudgetStatus, currency_symbol: &str) -> String {
    format!(
        "Warning: budget for '{}' exceeded this month ({} spent of {})",
        status.category,
        status.spent.format_with_symbol(currency_symbol),
        status.limit.format_with_symbol(currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money};

    fn status(exceeded: bool) -> BudgetStatus {
        BudgetStatus {
            category: "groceries".into(),
            spent: Money::from_cents(if exceeded { 70000 } else { 10000 }),
            limit: Money::from_cents(60000),
            exceeded,
        }
    }

    #[test]
    fn test_budget_list() {
        assert_eq!(format_budget_list(&BudgetBook::new(), "$"), "No budgets set.\n");

        let book = BudgetBook::from_budgets(vec![
            Budget::new("groceries", Money::from_cents(60000)).unwrap()
        ]);
        let out = format_budget_list(&book, "$");
        assert!(out.contains("groceries"));
        assert!(out.contains("$600.00"));
    }

    #[test]
    fn test_budget_status_table() {
        let out = format_budget_status(&[status(true), status(false)], "$");
        assert!(out.contains("OVER"));
        assert!(out.contains("ok"));
        assert!(out.contains("-$100.00"));
        assert!(out.contains("$500.00"));
    }

    #[test]
    fn test_budget_warning() {
        assert_eq!(
            format_budget_warning(&status(true), "$"),
            "Warning: budget for 'groceries' exceeded this month ($700.00 spent of $600.00)"
        );
    }
}
