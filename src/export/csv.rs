//! CSV export of a summary
//!
//! Layout:
//!
//! ```text
//! category,amount
//! salary,5000.00
//! groceries,-400.25
//!
//! total_income,5000.00
//! total_expenses,400.25
//! net_balance,4599.75
//! ```

use std::io::Write;

use ::csv::{Terminator, Writer, WriterBuilder};

use crate::error::{BudgetError, BudgetResult};
use crate::reports::Summary;

/// Render a summary to CSV bytes
pub fn render_summary_csv(summary: &Summary) -> BudgetResult<Vec<u8>> {
    let mut writer = csv_writer(Vec::new());
    writer.write_record(["category", "amount"]).map_err(export_err)?;
    for entry in &summary.by_category {
        let amount = entry.total.to_decimal_string();
        writer
            .write_record([entry.category.as_str(), amount.as_str()])
            .map_err(export_err)?;
    }

    // The csv writer would quote an empty single-field record, so the
    // separator line goes straight to the buffer.
    let mut buf = finish(writer)?;
    buf.push(b'\n');

    let mut writer = csv_writer(buf);
    let totals = [
        ("total_income", summary.total_income),
        ("total_expenses", summary.total_expenses),
        ("net_balance", summary.net_balance),
    ];
    for (label, value) in totals {
        let amount = value.to_decimal_string();
        writer
            .write_record([label, amount.as_str()])
            .map_err(export_err)?;
    }

    finish(writer)
}

/// Write a summary as CSV to any writer
pub fn write_summary_csv<W: Write>(summary: &Summary, writer: &mut W) -> BudgetResult<()> {
    let bytes = render_summary_csv(summary)?;
    writer.write_all(&bytes)?;
    Ok(())
}

fn csv_writer(buf: Vec<u8>) -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buf)
}

fn finish(writer: Writer<Vec<u8>>) -> BudgetResult<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| BudgetError::Export(e.to_string()))
}

fn export_err(err: ::csv::Error) -> BudgetError {
    BudgetError::Export(err.to_string())
}
