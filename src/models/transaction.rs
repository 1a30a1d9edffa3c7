//! Transaction model
//!
//! A single signed, dated, categorized monetary record. Transactions are
//! immutable once built; changing one means removing it and adding a new one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use super::timestamp::Timestamp;
use crate::error::{BudgetError, BudgetResult};

/// Identifier of a transaction, unique within a ledger
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one
    ///
    /// Fails once the id space is exhausted.
    pub fn next(&self) -> BudgetResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| BudgetError::Storage(format!("no transaction id after {}", self.0)))
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| BudgetError::Format(format!("Invalid transaction id: {:?}", s)))
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    timestamp: Timestamp,
    category: String,
    /// Positive or zero for income, negative for expense
    amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Transaction {
    /// Create a transaction
    ///
    /// The category must contain at least one non-whitespace character; it is
    /// stored exactly as given (case-sensitive, not trimmed).
    pub fn new(
        id: TransactionId,
        timestamp: Timestamp,
        category: impl Into<String>,
        amount: Money,
        description: Option<String>,
    ) -> BudgetResult<Self> {
        let category = category.into();
        validate_category(&category)?;
        amount.validate()?;
        Ok(Self {
            id,
            timestamp,
            category,
            amount,
            description,
        })
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Income includes zero-amount transactions
    pub fn is_income(&self) -> bool {
        !self.amount.is_negative()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Verify invariants on a transaction that came from storage
    pub fn validate(&self) -> BudgetResult<()> {
        validate_category(&self.category)?;
        self.amount.validate()
    }
}

/// Reject empty category labels
pub(crate) fn validate_category(category: &str) -> BudgetResult<()> {
    if category.trim().is_empty() {
        return Err(BudgetError::Validation(
            "category must not be empty".to_string(),
        ));
    }
    Ok(())
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] | {} | {}: {}",
            self.id,
            self.timestamp,
            self.category,
            self.amount.to_decimal_string()
        )?;
        if let Some(desc) = &self.description {
            write!(f, " ({})", desc)?;
        }
        Ok(())
    }
}
