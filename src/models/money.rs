//! Money type for representing ledger amounts
//!
//! Internally stores amounts in cents (i64) so every amount is exact to the
//! cent. Provides arithmetic, strict parsing and two-decimal formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{BudgetError, BudgetResult};

/// Represents a signed monetary amount stored as cents
///
/// Positive amounts are income, negative amounts are expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budgetmgr::models::Money;
    /// let amount = Money::from_cents(-40025);
    /// assert_eq!(amount.to_decimal_string(), "-400.25");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, failing instead of overflowing
    pub fn try_add(self, other: Self) -> BudgetResult<Self> {
        self.0.checked_add(other.0).map(Self).ok_or_else(|| {
            BudgetError::Validation(format!(
                "amount total out of range: {} + {}",
                self.to_decimal_string(),
                other.to_decimal_string()
            ))
        })
    }

    /// Sum amounts, failing instead of overflowing
    pub fn try_sum(amounts: impl IntoIterator<Item = Self>) -> BudgetResult<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |total, amount| total.try_add(amount))
    }

    /// Reject the one cents value whose magnitude cannot be represented
    pub fn validate(&self) -> BudgetResult<()> {
        if self.0 == i64::MIN {
            return Err(BudgetError::Validation(format!(
                "amount out of range: {} cents",
                self.0
            )));
        }
        Ok(())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "10", "10.5". More than two
    /// fractional digits is rejected rather than rounded.
    pub fn parse(input: &str) -> Result<Self, BudgetError> {
        let invalid = || BudgetError::Format(format!("Invalid amount: {:?}", input));
        let s = input.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        let (units_str, cents_str) = match s.split_once('.') {
            Some((units, cents)) => (units, cents),
            None => (s, ""),
        };

        if units_str.is_empty() || !units_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if cents_str.len() > 2 || !cents_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| invalid())?;
        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cents_str.parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Plain two-decimal rendering without a currency symbol ("-400.25")
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}
