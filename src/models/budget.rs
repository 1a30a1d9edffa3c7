//! Budget model
//!
//! A monthly spending ceiling for one category, and the collection that
//! keeps at most one budget per category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::transaction::validate_category;
use crate::error::{BudgetError, BudgetResult};

/// A per-category monthly spending ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    category: String,
    limit: Money,
}

impl Budget {
    /// Create a budget; the limit must be strictly positive
    pub fn new(category: impl Into<String>, limit: Money) -> BudgetResult<Self> {
        let budget = Self {
            category: category.into(),
            limit,
        };
        budget.validate()?;
        Ok(budget)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    /// Verify invariants on a budget that came from storage
    pub fn validate(&self) -> BudgetResult<()> {
        validate_category(&self.category)?;
        if !self.limit.is_positive() {
            return Err(BudgetError::Validation(format!(
                "budget limit for '{}' must be positive, got {}",
                self.category,
                self.limit.to_decimal_string()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / month", self.category, self.limit)
    }
}

/// Budgets keyed by category, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetBook {
    budgets: Vec<Budget>,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded budgets; later entries replace earlier ones
    pub fn from_budgets(budgets: impl IntoIterator<Item = Budget>) -> Self {
        let mut book = Self::new();
        for budget in budgets {
            book.set(budget);
        }
        book
    }

    /// Insert a budget, returning the one it replaced
    pub fn set(&mut self, budget: Budget) -> Option<Budget> {
        match self
            .budgets
            .iter_mut()
            .find(|b| b.category == budget.category)
        {
            Some(existing) => Some(std::mem::replace(existing, budget)),
            None => {
                self.budgets.push(budget);
                None
            }
        }
    }

    /// Remove the budget for a category
    pub fn remove(&mut self, category: &str) -> BudgetResult<Budget> {
        let pos = self
            .budgets
            .iter()
            .position(|b| b.category == category)
            .ok_or_else(|| BudgetError::budget_not_found(category))?;
        Ok(self.budgets.remove(pos))
    }

    pub fn get(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Budget> {
        self.budgets.iter()
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(cat: &str, cents: i64) -> Budget {
        Budget::new(cat, Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_new_budget() {
        let b = budget("groceries", 60000);
        assert_eq!(b.category(), "groceries");
        assert_eq!(b.limit().cents(), 60000);
    }

    #[test]
    fn test_non_positive_limit_rejected() {
        assert!(Budget::new("groceries", Money::zero())
            .unwrap_err()
            .is_validation());
        assert!(Budget::new("groceries", Money::from_cents(-100))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_empty_category_rejected() {
        assert!(Budget::new("", Money::from_cents(100))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut book = BudgetBook::new();
        assert!(book.set(budget("groceries", 60000)).is_none());
        assert!(book.set(budget("rent", 100000)).is_none());

        let replaced = book.set(budget("groceries", 70000)).unwrap();
        assert_eq!(replaced.limit().cents(), 60000);
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("groceries").unwrap().limit().cents(), 70000);
    }

    #[test]
    fn test_category_key_is_case_sensitive() {
        let mut book = BudgetBook::new();
        book.set(budget("groceries", 100));
        book.set(budget("Groceries", 200));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut book = BudgetBook::from_budgets(vec![budget("groceries", 100)]);
        let removed = book.remove("groceries").unwrap();
        assert_eq!(removed.category(), "groceries");
        assert!(book.is_empty());

        let err = book.remove("groceries").unwrap_err();
        assert!(err.is_not_found());
    }
}
