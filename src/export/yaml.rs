//! YAML export of a summary

use std::io::Write;

use crate::error::BudgetResult;
use crate::export::json::SummaryExport;
use crate::reports::Summary;

/// Write a summary as YAML
pub fn write_summary_yaml<W: Write>(summary: &Summary, writer: &mut W) -> BudgetResult<()> {
    let export = SummaryExport::from(summary);

    writeln!(writer, "# budgetmgr summary export")?;
    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}
