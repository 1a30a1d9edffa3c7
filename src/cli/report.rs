//! Report CLI commands: summary and chart

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::{format_range_chart, format_summary};
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_summary, ExportFormat};
use crate::models::period::parse_range_bound;
use crate::models::Period;
use crate::reports::summarize;
use crate::storage::Store;

/// Period selection shared by `summary` and `chart`
///
/// With no flags the current calendar month is used.
#[derive(Args, Debug, Default)]
pub struct PeriodArgs {
    /// Calendar year (e.g. 2025)
    #[arg(long, conflicts_with_all = ["month", "from", "to", "period"])]
    pub year: Option<i32>,
    /// Calendar month (YYYY-MM)
    #[arg(long, conflicts_with_all = ["from", "to", "period"])]
    pub month: Option<String>,
    /// Range start, timestamp or date (inclusive)
    #[arg(long, requires = "to", conflicts_with = "period")]
    pub from: Option<String>,
    /// Range end, timestamp or date (inclusive)
    #[arg(long, requires = "from", conflicts_with = "period")]
    pub to: Option<String>,
    /// Any period: "2025", "2025-05" or "START..END"
    #[arg(long)]
    pub period: Option<String>,
}

impl PeriodArgs {
    pub fn resolve(&self) -> BudgetResult<Period> {
        if let Some(year) = self.year {
            return Period::parse(&format!("{:04}", year));
        }
        if let Some(month) = &self.month {
            return match Period::parse(month)? {
                period @ Period::Month { .. } => Ok(period),
                _ => Err(BudgetError::Format(format!(
                    "Invalid month: {:?}. Use YYYY-MM",
                    month
                ))),
            };
        }
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            return Period::range(parse_range_bound(from, false)?, parse_range_bound(to, true)?);
        }
        if let Some(period) = &self.period {
            return Period::parse(period);
        }
        Ok(Period::current_month())
    }
}

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub period: PeriodArgs,
    /// Also export the summary to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Export format: csv, json or yaml
    #[arg(short, long, default_value = "csv")]
    pub format: String,
}

/// Arguments for `chart`
#[derive(Args, Debug)]
pub struct ChartArgs {
    #[command(flatten)]
    pub period: PeriodArgs,
}

/// Print a summary and optionally export it
pub fn handle_summary(
    store: &dyn Store,
    settings: &Settings,
    args: SummaryArgs,
) -> BudgetResult<()> {
    let format: ExportFormat = args.format.parse()?;
    let period = args.period.resolve()?;

    let ledger = store.load_ledger()?;
    let summary = summarize(&ledger, &period)?;
    print!(
        "{}",
        format_summary(&summary, &period.to_string(), &settings.currency_symbol)
    );

    if let Some(path) = args.output {
        let written = export_summary(&summary, &path, format)?;
        println!();
        println!("Exported {} summary to {}", format, written.display());
    }
    Ok(())
}

/// Print the ASCII chart for a period
pub fn handle_chart(store: &dyn Store, args: ChartArgs) -> BudgetResult<()> {
    let (start, end) = args.period.resolve()?.bounds()?;
    let ledger = store.load_ledger()?;
    print!("{}", format_range_chart(&ledger, start, end)?);
    Ok(())
}
