//! Summary and balance formatting for terminal output

use crate::error::BudgetResult;
use crate::ledger::Ledger;
use crate::reports::Summary;

/// Format a period summary: totals first, then the category breakdown
pub fn format_summary(summary: &Summary, title: &str, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary for {}\n", title));
    output.push_str(&"=".repeat(40));
    output.push('\n');

    let totals = [
        ("Income", summary.total_income),
        ("Expenses", summary.total_expenses),
        ("Net balance", summary.net_balance),
    ];
    for (label, value) in totals {
        output.push_str(&format!(
            "{:<12} {:>16}\n",
            format!("{}:", label),
            value.format_with_symbol(currency_symbol)
        ));
    }

    if summary.by_category.is_empty() {
        output.push_str("\nNo category activity.\n");
        return output;
    }

    let width = summary
        .by_category
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    output.push('\n');
    output.push_str(&format!("{:<width$}  {:>14}\n", "Category", "Total", width = width));
    output.push_str(&format!("{:-<width$}  {:->14}\n", "", "", width = width));
    for entry in &summary.by_category {
        output.push_str(&format!(
            "{:<width$}  {:>14}\n",
            entry.category,
            entry.total.format_with_symbol(currency_symbol),
            width = width
        ));
    }

    output
}

/// Format overall ledger totals
pub fn format_balance(ledger: &Ledger, currency_symbol: &str) -> BudgetResult<String> {
    Ok(format!(
        "Balance:  {}\nIncome:   {}\nExpenses: {}\n",
        ledger.net_balance()?.format_with_symbol(currency_symbol),
        ledger.total_income()?.format_with_symbol(currency_symbol),
        ledger.total_expenses()?.format_with_symbol(currency_symbol),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Timestamp};
    use crate::reports::CategoryTotal;

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            total_income: Money::from_cents(500000),
            total_expenses: Money::from_cents(40025),
            net_balance: Money::from_cents(459975),
            by_category: vec![CategoryTotal {
                category: "groceries".into(),
                total: Money::from_cents(-40025),
            }],
        };

        let out = format_summary(&summary, "2025-05", "$");
        assert!(out.starts_with("Summary for 2025-05\n"));
        assert!(out.contains("$5000.00"));
        assert!(out.contains("$4599.75"));
        assert!(out.contains("groceries"));
        assert!(out.contains("-$400.25"));
    }

    #[test]
    fn test_format_empty_summary() {
        let out = format_summary(&Summary::default(), "2025", "€");
        assert!(out.contains("€0.00"));
        assert!(out.contains("No category activity."));
    }

    #[test]
    fn test_format_balance() {
        let mut ledger = Ledger::new();
        let ts = Timestamp::from_components(2025, 1, 1, 0, 0, 0).unwrap();
        ledger.add(ts, "salary", Money::from_cents(1000), None).unwrap();
        ledger.add(ts, "coffee", Money::from_cents(-250), None).unwrap();

        assert_eq!(
            format_balance(&ledger, "$").unwrap(),
            "Balance:  $7.50\nIncome:   $10.00\nExpenses: $2.50\n"
        );
    }

    #[test]
    fn test_format_balance_overflow() {
        let mut ledger = Ledger::new();
        let ts = Timestamp::from_components(2025, 1, 1, 0, 0, 0).unwrap();
        let large = Money::parse("90000000000000000").unwrap();
        ledger.add(ts, "windfall", large, None).unwrap();
        ledger.add(ts, "windfall", large, None).unwrap();

        assert!(format_balance(&ledger, "$").unwrap_err().is_validation());
    }
}
