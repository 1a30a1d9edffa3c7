//! Reporting period selector
//!
//! A period is a calendar year, a calendar month, or an explicit inclusive
//! timestamp range. Every period resolves to inclusive `(start, end)` bounds.

use chrono::NaiveDate;
use std::fmt;

use super::timestamp::Timestamp;
use crate::error::{BudgetError, BudgetResult};

/// Represents the span of time a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Whole calendar year (e.g., "2025")
    Year(i32),

    /// Calendar month (e.g., "2025-05")
    Month { year: i32, month: u32 },

    /// Inclusive range (e.g., "2025-05-01..2025-05-15")
    Range { start: Timestamp, end: Timestamp },
}

impl Period {
    pub fn year(year: i32) -> Self {
        Self::Year(year)
    }

    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// Create a range period; `start` must not be after `end`
    pub fn range(start: Timestamp, end: Timestamp) -> BudgetResult<Self> {
        if start > end {
            return Err(BudgetError::Validation(format!(
                "range start {} is after end {}",
                start, end
            )));
        }
        Ok(Self::Range { start, end })
    }

    /// The month containing the given timestamp
    pub fn month_of(ts: Timestamp) -> Self {
        Self::Month {
            year: ts.year(),
            month: ts.month(),
        }
    }

    /// The current calendar month
    pub fn current_month() -> Self {
        Self::month_of(Timestamp::now())
    }

    /// Inclusive bounds of this period
    pub fn bounds(&self) -> BudgetResult<(Timestamp, Timestamp)> {
        match self {
            Self::Year(year) => Timestamp::year_bounds(*year),
            Self::Month { year, month } => Timestamp::month_bounds(*year, *month),
            Self::Range { start, end } => Ok((*start, *end)),
        }
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Year: "2025"
    /// - Month: "2025-05"
    /// - Range: "2025-05-01..2025-05-15" or full timestamps
    ///   "2025-05-01T08:00:00..2025-05-01T18:00:00"
    ///
    /// A bare date as range start means `00:00:00`; as range end, `23:59:59`.
    pub fn parse(s: &str) -> BudgetResult<Self> {
        let s = s.trim();
        let invalid = || BudgetError::Format(format!("Invalid period format: {:?}", s));

        if let Some((start, end)) = s.split_once("..") {
            let start = parse_range_bound(start.trim(), false)?;
            let end = parse_range_bound(end.trim(), true)?;
            return Self::range(start, end);
        }

        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [year] if is_digits(year, 4) => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                Timestamp::year_bounds(year)?;
                Ok(Self::Year(year))
            }
            [year, month] if is_digits(year, 4) && is_digits(month, 2) => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let month: u32 = month.parse().map_err(|_| invalid())?;
                Timestamp::month_bounds(year, month)?;
                Ok(Self::Month { year, month })
            }
            _ => Err(invalid()),
        }
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse one side of a range: full ISO timestamp, or a `YYYY-MM-DD` date
pub fn parse_range_bound(s: &str, is_end: bool) -> BudgetResult<Timestamp> {
    if s.contains('T') {
        return Timestamp::from_iso(s);
    }
    if s.len() != 10 {
        return Err(BudgetError::Format(format!("Invalid date: {:?}", s)));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| BudgetError::Format(format!("Invalid date: {:?}", s)))?;
    if is_end {
        Timestamp::end_of_day(date)
    } else {
        Timestamp::start_of_day(date)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{:04}", year),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Range { start, end } => write!(f, "{}..{}", start, end),
        }
    }
}
