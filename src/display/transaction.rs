//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Timestamp")]
    timestamp: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, currency_symbol: &str) -> Self {
        Self {
            id: txn.id().to_string(),
            timestamp: txn.timestamp().to_iso(),
            category: txn.category().to_string(),
            amount: txn.amount().format_with_symbol(currency_symbol),
            description: txn.description().unwrap_or_default().to_string(),
        }
    }
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[&Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, currency_symbol));

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// One-line confirmation after adding a transaction
pub fn format_added(txn: &Transaction) -> String {
    format!("Added: {}", txn)
}
