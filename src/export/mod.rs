//! Export module for budgetmgr
//!
//! Writes a period summary to disk in one of three formats:
//! - CSV: fixed `category,amount` layout followed by the totals
//! - JSON: machine-readable
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::reports::Summary;

pub use self::csv::{render_summary_csv, write_summary_csv};
pub use self::json::{write_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::write_summary_yaml;

/// Output format of a summary export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(BudgetError::Format(format!(
                "Unknown export format '{}'. Use csv, json, or yaml",
                other
            ))),
        }
    }
}

/// Render a summary in the given format
pub fn render_summary(summary: &Summary, format: ExportFormat) -> BudgetResult<Vec<u8>> {
    let mut out = Vec::new();
    match format {
        ExportFormat::Csv => write_summary_csv(summary, &mut out)?,
        ExportFormat::Json => write_summary_json(summary, &mut out)?,
        ExportFormat::Yaml => write_summary_yaml(summary, &mut out)?,
    }
    Ok(out)
}

/// Write a summary to `path` and return the path written
///
/// The document is rendered fully before the file is touched. Missing parent
/// directories are not created; writing into one fails with an I/O error.
pub fn export_summary(
    summary: &Summary,
    path: impl AsRef<Path>,
    format: ExportFormat,
) -> BudgetResult<PathBuf> {
    let path = path.as_ref();
    let bytes = render_summary(summary, format)?;

    fs::write(path, &bytes)
        .map_err(|e| BudgetError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), %format, bytes = bytes.len(), "summary exported");
    Ok(path.to_path_buf())
}
