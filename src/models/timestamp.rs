//! Timestamp value type
//!
//! A calendar date plus time of day with second precision. The text form is
//! the fixed-width ISO-8601 layout `YYYY-MM-DDThh:mm:ss` with no offset.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BudgetError, BudgetResult};

const ISO_LEN: usize = 19;
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Immutable calendar date and time of day
///
/// Ordering is lexicographic over (year, month, day, hour, minute, second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Build a timestamp from explicit components
    ///
    /// Fails with a validation error when any component is outside its
    /// calendar range, including leap-year aware day-of-month limits.
    ///
    /// # Examples
    /// ```
    /// use budgetmgr::models::Timestamp;
    /// let ts = Timestamp::from_components(2024, 2, 29, 23, 59, 59).unwrap();
    /// assert_eq!(ts.to_iso(), "2024-02-29T23:59:59");
    /// assert!(Timestamp::from_components(2025, 2, 29, 0, 0, 0).is_err());
    /// ```
    pub fn from_components(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> BudgetResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(BudgetError::Validation(format!(
                "year {} is outside {}-{}",
                year, MIN_YEAR, MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(BudgetError::Validation(format!(
                "month {} is outside 1-12",
                month
            )));
        }
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            BudgetError::Validation(format!(
                "day {} is not valid for {:04}-{:02}",
                day, year, month
            ))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            BudgetError::Validation(format!(
                "time {:02}:{:02}:{:02} is out of range",
                hour, minute, second
            ))
        })?;
        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// Parse the strict `YYYY-MM-DDThh:mm:ss` form
    ///
    /// Any deviation (separators, widths, out-of-range components, trailing
    /// text such as fractions or offsets) is a format error.
    pub fn from_iso(s: &str) -> BudgetResult<Self> {
        let bytes = s.as_bytes();
        let invalid = || BudgetError::Format(format!("Invalid ISO timestamp: {:?}", s));

        if bytes.len() != ISO_LEN {
            return Err(invalid());
        }
        for (i, b) in bytes.iter().enumerate() {
            let ok = match i {
                4 | 7 => *b == b'-',
                10 => *b == b'T',
                13 | 16 => *b == b':',
                _ => b.is_ascii_digit(),
            };
            if !ok {
                return Err(invalid());
            }
        }

        // All digit positions were checked above, so these slices parse.
        let field = |range: std::ops::Range<usize>| -> BudgetResult<u32> {
            s[range].parse::<u32>().map_err(|_| invalid())
        };
        let year = field(0..4)? as i32;
        let month = field(5..7)?;
        let day = field(8..10)?;
        let hour = field(11..13)?;
        let minute = field(14..16)?;
        let second = field(17..19)?;

        Self::from_components(year, month, day, hour, minute, second).map_err(|e| match e {
            BudgetError::Validation(msg) => {
                BudgetError::Format(format!("Invalid ISO timestamp {:?}: {}", s, msg))
            }
            other => other,
        })
    }

    /// Current local wall-clock time, truncated to whole seconds
    pub fn now() -> Self {
        let now = chrono::Local::now().naive_local();
        Self(now.with_nanosecond(0).unwrap_or(now))
    }

    /// Render the fixed-width ISO-8601 form
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// First and last instant of a year: `Y-01-01T00:00:00` .. `Y-12-31T23:59:59`
    pub fn year_bounds(year: i32) -> BudgetResult<(Self, Self)> {
        Ok((
            Self::from_components(year, 1, 1, 0, 0, 0)?,
            Self::from_components(year, 12, 31, 23, 59, 59)?,
        ))
    }

    /// First and last instant of a calendar month
    ///
    /// Fails with a validation error if `month` is outside 1-12.
    pub fn month_bounds(year: i32, month: u32) -> BudgetResult<(Self, Self)> {
        let last_day = days_in_month(year, month)?;
        Ok((
            Self::from_components(year, month, 1, 0, 0, 0)?,
            Self::from_components(year, month, last_day, 23, 59, 59)?,
        ))
    }

    /// Bounds of the calendar month containing this timestamp
    pub fn enclosing_month(&self) -> BudgetResult<(Self, Self)> {
        Self::month_bounds(self.year(), self.month())
    }

    /// Start of the given day (`00:00:00`)
    pub fn start_of_day(date: NaiveDate) -> BudgetResult<Self> {
        Self::from_components(date.year(), date.month(), date.day(), 0, 0, 0)
    }

    /// Last second of the given day (`23:59:59`)
    pub fn end_of_day(date: NaiveDate) -> BudgetResult<Self> {
        Self::from_components(date.year(), date.month(), date.day(), 23, 59, 59)
    }
}

/// Number of days in a month, honouring leap years
pub fn days_in_month(year: i32, month: u32) -> BudgetResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(BudgetError::Validation(format!(
            "month {} is outside 1-12",
            month
        )));
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .ok_or_else(|| BudgetError::Validation(format!("year {} is out of range", year)))
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl FromStr for Timestamp {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = BudgetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_iso(&value)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_iso()
    }
}
