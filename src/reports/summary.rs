//! Ledger summaries
//!
//! Totals by kind for the whole ledger, and expense totals per category for
//! a (usually filtered) listing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Kind, Money, Transaction};

/// Income, expense and the resulting balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`; may be negative
    pub balance: Money,
}

/// Sum amounts by kind
pub fn summarize<'a, I>(transactions: I) -> Summary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();

    for txn in transactions {
        match txn.kind {
            Kind::Income => total_income += txn.amount,
            Kind::Expense => total_expense += txn.amount,
        }
    }

    Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

/// Expense totals keyed by category name
///
/// Iterates in category-name order. Callers should not rely on that order
/// for anything but stable display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(BTreeMap<String, Money>);

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(name, total)| (name.as_str(), *total))
    }
}

/// Accumulate expense amounts per category
///
/// Returns `None` for an empty input so "nothing to summarize" can be told
/// apart from "no expenses among these entries" (`Some` with no categories).
pub fn summarize_by_category<'a, I>(transactions: I) -> Option<CategoryTotals>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut transactions = transactions.into_iter().peekable();
    transactions.peek()?;

    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for txn in transactions.filter(|t| t.is_expense()) {
        *totals.entry(txn.category.clone()).or_default() += txn.amount;
    }

    Some(CategoryTotals(totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, TransactionId};

    fn txn(id: u64, amount: &str, category: &str, kind: Kind, date: &str) -> Transaction {
        let entry = EntryDraft::new(amount, category, kind, date).validate().unwrap();
        Transaction::from_entry(TransactionId::from_raw(id), entry)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, "500", "Salary", Kind::Income, "2024-05-01"),
            txn(2, "200", "Food", Kind::Expense, "2024-05-03"),
            txn(3, "50", "Food", Kind::Expense, "2024-06-01"),
        ]
    }

    #[test]
    fn test_summarize_sample() {
        let summary = summarize(&sample());

        assert_eq!(summary.total_income, Money::from_units(500));
        assert_eq!(summary.total_expense, Money::from_units(250));
        assert_eq!(summary.balance, Money::from_units(250));
    }

    #[test]
    fn test_summarize_is_additive() {
        let amounts = ["10", "20.5", "0.25", "1000"];
        let transactions: Vec<_> = amounts
            .iter()
            .enumerate()
            .map(|(i, a)| txn(i as u64, *a, "Job", Kind::Income, "2024-01-01"))
            .collect();

        let summary = summarize(&transactions);
        assert_eq!(summary.total_income, Money::from_cents(103075));
        assert_eq!(summary.total_expense, Money::zero());
        assert_eq!(summary.total_income - summary.total_expense, summary.balance);
    }

    #[test]
    fn test_negative_balance() {
        let transactions = vec![txn(1, "10", "Food", Kind::Expense, "2024-01-01")];
        assert_eq!(summarize(&transactions).balance, Money::from_units(-10));
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&Vec::<Transaction>::new()), Summary::default());
    }

    #[test]
    fn test_by_category_sample() {
        let totals = summarize_by_category(&sample()).unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("Food"), Some(Money::from_units(250)));
        assert_eq!(totals.get("Salary"), None);
    }

    #[test]
    fn test_by_category_empty_input_is_no_data() {
        assert_eq!(summarize_by_category(&Vec::<Transaction>::new()), None);
    }

    #[test]
    fn test_by_category_income_only_is_empty_mapping() {
        let transactions = vec![txn(1, "500", "Salary", Kind::Income, "2024-05-01")];
        let totals = summarize_by_category(&transactions).unwrap();
        assert!(totals.is_empty());
    }

    #[test]
    fn test_by_category_iteration_is_stable() {
        let transactions = vec![
            txn(1, "1", "Rent", Kind::Expense, "2024-05-01"),
            txn(2, "2", "Food", Kind::Expense, "2024-05-01"),
            txn(3, "3", "Rent", Kind::Expense, "2024-05-01"),
        ];
        let totals = summarize_by_category(&transactions).unwrap();
        let names: Vec<_> = totals.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Food", "Rent"]);
        assert_eq!(totals.get("Rent"), Some(Money::from_units(4)));
    }
}
