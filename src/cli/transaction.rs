//! Transaction CLI commands: add, remove, list, balance

use clap::Args;
use tracing::warn;

use crate::config::Settings;
use crate::display::{format_added, format_balance, format_budget_warning, format_transaction_table};
use crate::error::BudgetResult;
use crate::ledger::sort_chronologically;
use crate::models::period::parse_range_bound;
use crate::models::{Money, Timestamp, Transaction, TransactionId};
use crate::reports::evaluate;
use crate::storage::Store;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Category or tag
    #[arg(short, long)]
    pub category: String,
    /// Amount, positive for income and negative for expense (e.g. "-12.50")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
    /// Timestamp (YYYY-MM-DDThh:mm:ss), defaults to now
    #[arg(short, long)]
    pub timestamp: Option<String>,
    /// Short description
    #[arg(short, long)]
    pub description: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Earliest timestamp or date (inclusive)
    #[arg(long)]
    pub from: Option<String>,
    /// Latest timestamp or date (inclusive)
    #[arg(long)]
    pub to: Option<String>,
}

/// Add a transaction, persist it, then check the category budget
pub fn handle_add(store: &mut dyn Store, settings: &Settings, args: AddArgs) -> BudgetResult<()> {
    let timestamp = match &args.timestamp {
        Some(ts) => Timestamp::from_iso(ts)?,
        None => Timestamp::now(),
    };
    let amount = Money::parse(&args.amount)?;
    let description = args.description.filter(|d| !d.is_empty());

    let mut ledger = store.load_ledger()?;
    let txn = ledger.add(timestamp, args.category, amount, description)?;
    store.save_transaction(&txn)?;
    println!("{}", format_added(&txn));

    let budgets = store.load_budget_book()?;
    if let Some(budget) = budgets.get(txn.category()) {
        let status = evaluate(&ledger, budget, txn.timestamp())?;
        if status.exceeded {
            warn!(
                category = txn.category(),
                spent = %status.spent,
                limit = %status.limit,
                "budget exceeded"
            );
            println!("{}", format_budget_warning(&status, &settings.currency_symbol));
        }
    }

    Ok(())
}

/// Remove a transaction by id
pub fn handle_remove(store: &mut dyn Store, id: &str) -> BudgetResult<()> {
    let id: TransactionId = id.parse()?;

    let mut ledger = store.load_ledger()?;
    let txn = ledger.remove(id)?;
    store.delete_transaction(id)?;

    println!("Removed: {}", txn);
    Ok(())
}

/// List transactions chronologically with optional filters
pub fn handle_list(store: &dyn Store, settings: &Settings, args: ListArgs) -> BudgetResult<()> {
    let ledger = store.load_ledger()?;

    let start = args
        .from
        .as_deref()
        .map(|s| parse_range_bound(s, false))
        .transpose()?;
    let end = args
        .to
        .as_deref()
        .map(|s| parse_range_bound(s, true))
        .transpose()?;

    let mut transactions: Vec<&Transaction> = match (start, end) {
        (Some(start), Some(end)) => ledger.filter_by_range(start, end)?,
        _ => ledger
            .iter()
            .filter(|t| start.map_or(true, |s| t.timestamp() >= s))
            .filter(|t| end.map_or(true, |e| t.timestamp() <= e))
            .collect(),
    };

    if let Some(category) = &args.category {
        transactions.retain(|t| t.category() == category.as_str());
    }
    sort_chronologically(&mut transactions);

    print!(
        "{}",
        format_transaction_table(&transactions, &settings.currency_symbol)
    );
    Ok(())
}

/// Print overall balance, income and expenses
pub fn handle_balance(store: &dyn Store, settings: &Settings) -> BudgetResult<()> {
    let ledger = store.load_ledger()?;
    print!("{}", format_balance(&ledger, &settings.currency_symbol)?);
    Ok(())
}
