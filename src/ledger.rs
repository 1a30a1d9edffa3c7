//! In-memory ledger of transactions
//!
//! The ledger owns id assignment and uniqueness. Queries are linear scans;
//! iteration follows insertion order, so callers that need chronological
//! order use [`Ledger::chronological`].

use std::collections::HashSet;

use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Timestamp, Transaction, TransactionId};

/// Mutable collection of transactions with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    /// Next id to hand out; never decreases, so removed ids are not reused
    next_id: TransactionId,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from persisted transactions
    ///
    /// `id_floor` is the lowest id the ledger may assign next; storage
    /// passes its counter so ids removed in earlier runs stay retired.
    /// Fails if two transactions share an id.
    pub fn from_transactions(
        transactions: Vec<Transaction>,
        id_floor: TransactionId,
    ) -> BudgetResult<Self> {
        let mut seen = HashSet::with_capacity(transactions.len());
        let mut next_id = id_floor;

        for txn in &transactions {
            txn.validate()?;
            if !seen.insert(txn.id()) {
                return Err(BudgetError::Duplicate {
                    entity_type: "Transaction",
                    identifier: txn.id().to_string(),
                });
            }
            if txn.id() >= next_id {
                next_id = txn.id().next()?;
            }
        }

        debug!(count = transactions.len(), next_id = %next_id, "ledger loaded");
        Ok(Self {
            transactions,
            next_id,
        })
    }

    /// Add a new transaction and return it
    ///
    /// The id is one past the highest id ever assigned by this ledger.
    pub fn add(
        &mut self,
        timestamp: Timestamp,
        category: impl Into<String>,
        amount: Money,
        description: Option<String>,
    ) -> BudgetResult<Transaction> {
        let txn = Transaction::new(self.next_id, timestamp, category, amount, description)?;
        self.next_id = self.next_id.next()?;
        self.transactions.push(txn.clone());

        debug!(
            id = %txn.id(),
            category = txn.category(),
            amount = %txn.amount(),
            "transaction added"
        );
        Ok(txn)
    }

    /// Remove and return the transaction with the given id
    ///
    /// The ledger is left unchanged when the id is absent.
    pub fn remove(&mut self, id: TransactionId) -> BudgetResult<Transaction> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;
        let txn = self.transactions.remove(pos);

        debug!(id = %id, "transaction removed");
        Ok(txn)
    }

    /// Look up a transaction by id
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    /// Transactions whose category matches exactly (case-sensitive)
    pub fn filter_by_category(&self, category: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.category() == category)
            .collect()
    }

    /// Transactions with `start <= timestamp <= end`
    pub fn filter_by_range(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> BudgetResult<Vec<&Transaction>> {
        if start > end {
            return Err(BudgetError::Validation(format!(
                "range start {} is after end {}",
                start, end
            )));
        }
        Ok(self
            .transactions
            .iter()
            .filter(|t| start <= t.timestamp() && t.timestamp() <= end)
            .collect())
    }

    /// Sum of all non-negative amounts
    ///
    /// Fails with a validation error if the total overflows.
    pub fn total_income(&self) -> BudgetResult<Money> {
        Money::try_sum(
            self.transactions
                .iter()
                .filter(|t| t.is_income())
                .map(|t| t.amount()),
        )
    }

    /// Sum of the magnitudes of all negative amounts
    pub fn total_expenses(&self) -> BudgetResult<Money> {
        Money::try_sum(
            self.transactions
                .iter()
                .filter(|t| t.is_expense())
                .map(|t| t.amount().abs()),
        )
    }

    /// Income minus expenses; equals the sum of every amount
    pub fn net_balance(&self) -> BudgetResult<Money> {
        Ok(self.total_income()? - self.total_expenses()?)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Positional access in iteration order
    pub fn get_at(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    /// Iterate in a stable, unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// All transactions sorted by timestamp, ties broken by id
    pub fn chronological(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<_> = self.transactions.iter().collect();
        sort_chronologically(&mut sorted);
        sorted
    }

    /// The id the next `add` will assign
    pub fn next_id(&self) -> TransactionId {
        self.next_id
    }
}

/// Sort transactions by timestamp, then id
pub fn sort_chronologically(transactions: &mut [&Transaction]) {
    transactions.sort_by(|a, b| {
        a.timestamp()
            .cmp(&b.timestamp())
            .then_with(|| a.id().cmp(&b.id()))
    });
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        Timestamp::from_components(y, mo, d, h, mi, s).unwrap()
    }

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add(ts(2025, 5, 1, 0, 0, 0), "salary", money("5000.00"), None)
            .unwrap();
        ledger
            .add(ts(2025, 5, 10, 12, 0, 0), "groceries", money("-400.25"), None)
            .unwrap();
        ledger
            .add(ts(2025, 5, 20, 9, 0, 0), "rent", money("-800.25"), None)
            .unwrap();
        ledger
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let ledger = sample_ledger();
        let ids: Vec<u64> = ledger.iter().map(|t| t.id().value()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut ledger = sample_ledger();
        ledger.remove(TransactionId::new(2)).unwrap();
        let txn = ledger
            .add(ts(2025, 5, 21, 0, 0, 0), "misc", money("-1"), None)
            .unwrap();
        assert_eq!(txn.id(), TransactionId::new(3));
    }

    #[test]
    fn test_add_rejects_empty_category() {
        let mut ledger = Ledger::new();
        let err = ledger
            .add(ts(2025, 5, 1, 0, 0, 0), "", money("1"), None)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_id(), TransactionId::new(0));
    }

    #[test]
    fn test_remove_returns_transaction() {
        let mut ledger = sample_ledger();
        let removed = ledger.remove(TransactionId::new(1)).unwrap();
        assert_eq!(removed.category(), "groceries");
        assert_eq!(ledger.len(), 2);
        assert!(ledger.get(TransactionId::new(1)).is_none());
    }

    #[test]
    fn test_remove_missing_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();

        let err = ledger.remove(TransactionId::new(99)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ledger.len(), before.len());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_filter_by_category_is_case_sensitive() {
        let mut ledger = sample_ledger();
        ledger
            .add(ts(2025, 5, 11, 0, 0, 0), "Groceries", money("-5"), None)
            .unwrap();

        let found = ledger.filter_by_category("groceries");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amount(), money("-400.25"));
        assert!(ledger.filter_by_category("GROCERIES").is_empty());
    }

    #[test]
    fn test_filter_by_range_inclusive() {
        let ledger = sample_ledger();
        let start = ts(2025, 5, 1, 0, 0, 0);
        let end = ts(2025, 5, 10, 12, 0, 0);

        let found = ledger.filter_by_range(start, end).unwrap();
        assert_eq!(found.len(), 2);

        let end_minus = ts(2025, 5, 10, 11, 59, 59);
        assert_eq!(ledger.filter_by_range(start, end_minus).unwrap().len(), 1);
    }

    #[test]
    fn test_filter_by_range_excludes_one_second_past_end() {
        let mut ledger = Ledger::new();
        ledger
            .add(ts(2025, 5, 31, 23, 59, 59), "a", money("1"), None)
            .unwrap();
        ledger
            .add(ts(2025, 6, 1, 0, 0, 0), "b", money("1"), None)
            .unwrap();

        let found = ledger
            .filter_by_range(ts(2025, 5, 1, 0, 0, 0), ts(2025, 5, 31, 23, 59, 59))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category(), "a");
    }

    #[test]
    fn test_filter_by_range_inverted_fails() {
        let ledger = sample_ledger();
        let err = ledger
            .filter_by_range(ts(2025, 6, 1, 0, 0, 0), ts(2025, 5, 1, 0, 0, 0))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_filter_by_range_empty_result() {
        let ledger = sample_ledger();
        let found = ledger
            .filter_by_range(ts(2024, 1, 1, 0, 0, 0), ts(2024, 12, 31, 23, 59, 59))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_totals() {
        let mut ledger = sample_ledger();
        ledger
            .add(ts(2025, 5, 2, 0, 0, 0), "gift", Money::zero(), None)
            .unwrap();

        assert_eq!(ledger.total_income().unwrap(), money("5000.00"));
        assert_eq!(ledger.total_expenses().unwrap(), money("1200.50"));
        assert_eq!(ledger.net_balance().unwrap(), money("3799.50"));

        let sum = Money::try_sum(ledger.iter().map(|t| t.amount())).unwrap();
        assert_eq!(ledger.net_balance().unwrap(), sum);
    }

    #[test]
    fn test_totals_on_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.total_income().unwrap().is_zero());
        assert!(ledger.total_expenses().unwrap().is_zero());
        assert!(ledger.net_balance().unwrap().is_zero());
    }

    #[test]
    fn test_totals_overflow_is_an_error() {
        let mut ledger = Ledger::new();
        for day in [1, 2] {
            ledger
                .add(ts(2025, 5, day, 0, 0, 0), "windfall", money("90000000000000000"), None)
                .unwrap();
            ledger
                .add(ts(2025, 5, day, 0, 0, 0), "loss", money("-90000000000000000"), None)
                .unwrap();
        }

        assert!(ledger.total_income().unwrap_err().is_validation());
        assert!(ledger.total_expenses().unwrap_err().is_validation());
        assert!(ledger.net_balance().unwrap_err().is_validation());
    }

    #[test]
    fn test_positional_access_and_chronological() {
        let mut ledger = Ledger::new();
        ledger
            .add(ts(2025, 5, 3, 0, 0, 0), "c", money("1"), None)
            .unwrap();
        ledger
            .add(ts(2025, 5, 1, 0, 0, 0), "a", money("1"), None)
            .unwrap();
        ledger
            .add(ts(2025, 5, 1, 0, 0, 0), "b", money("1"), None)
            .unwrap();

        assert_eq!(ledger.get_at(0).unwrap().category(), "c");
        assert!(ledger.get_at(3).is_none());

        let order: Vec<&str> = ledger.chronological().iter().map(|t| t.category()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_transactions_rejects_duplicate_ids() {
        let t = Transaction::new(
            TransactionId::new(4),
            ts(2025, 1, 1, 0, 0, 0),
            "x",
            money("1"),
            None,
        )
        .unwrap();
        let err = Ledger::from_transactions(vec![t.clone(), t], TransactionId::new(0)).unwrap_err();
        assert!(matches!(err, BudgetError::Duplicate { .. }));
    }

    #[test]
    fn test_from_transactions_respects_id_floor() {
        let t = Transaction::new(
            TransactionId::new(4),
            ts(2025, 1, 1, 0, 0, 0),
            "x",
            money("1"),
            None,
        )
        .unwrap();

        let ledger = Ledger::from_transactions(vec![t.clone()], TransactionId::new(0)).unwrap();
        assert_eq!(ledger.next_id(), TransactionId::new(5));

        let ledger = Ledger::from_transactions(vec![t], TransactionId::new(10)).unwrap();
        assert_eq!(ledger.next_id(), TransactionId::new(10));
    }

    #[test]
    fn test_from_transactions_with_last_possible_id() {
        let t = Transaction::new(
            TransactionId::new(u64::MAX),
            ts(2025, 1, 1, 0, 0, 0),
            "x",
            money("1"),
            None,
        )
        .unwrap();

        let err = Ledger::from_transactions(vec![t], TransactionId::new(0)).unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
    }

    #[test]
    fn test_from_transactions_rejects_unrepresentable_amount() {
        let stored: Transaction = serde_json::from_str(&format!(
            r#"{{"id":0,"timestamp":"2025-05-01T00:00:00","category":"x","amount":{}}}"#,
            i64::MIN
        ))
        .unwrap();
        let err = Ledger::from_transactions(vec![stored], TransactionId::new(0)).unwrap_err();
        assert!(err.is_validation());
    }
}
