//! Presentation model for a ledger listing
//!
//! [`LedgerView`] is everything a front end needs to draw one screen:
//! formatted rows for the filtered entries, the ledger-wide summary and the
//! expense breakdown of the visible rows. Building it has no side effects.

use serde::Serialize;

use crate::models::{Transaction, TransactionId};
use crate::reports::{summarize, summarize_by_category, Summary};
use crate::services::TransactionFilter;

/// One formatted listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: TransactionId,
    /// Amount with currency symbol, e.g. `Rs 500`
    pub amount: String,
    pub category: String,
    pub kind: String,
    pub date: String,
}

impl RowView {
    pub fn from_transaction(txn: &Transaction, symbol: &str) -> Self {
        Self {
            id: txn.id,
            amount: txn.amount.format_with_symbol(symbol),
            category: txn.category.clone(),
            kind: txn.kind.to_string(),
            date: txn.date_string(),
        }
    }
}

/// Expense breakdown for the visible rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CategoryView {
    /// The filtered listing was empty
    NoExpenseData,
    /// `(category, formatted total)` pairs; empty when only income is visible
    Totals(Vec<(String, String)>),
}

/// Formatted summary lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub income: String,
    pub expense: String,
    pub balance: String,
}

impl SummaryView {
    pub fn new(summary: &Summary, symbol: &str) -> Self {
        Self {
            income: summary.total_income.format_with_symbol(symbol),
            expense: summary.total_expense.format_with_symbol(symbol),
            balance: summary.balance.format_with_symbol(symbol),
        }
    }
}

/// Everything needed to render one listing screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerView {
    pub rows: Vec<RowView>,
    /// Totals over the whole ledger, not just the visible rows
    pub summary: Summary,
    pub summary_text: SummaryView,
    pub categories: CategoryView,
}

impl LedgerView {
    /// Build the view for `transactions` narrowed by `filter`
    pub fn build(transactions: &[Transaction], filter: &TransactionFilter, symbol: &str) -> Self {
        let visible: Vec<&Transaction> = transactions.iter().filter(|t| filter.matches(t)).collect();

        let rows = visible
            .iter()
            .map(|t| RowView::from_transaction(t, symbol))
            .collect();

        let categories = match summarize_by_category(visible.iter().copied()) {
            None => CategoryView::NoExpenseData,
            Some(totals) => CategoryView::Totals(
                totals
                    .iter()
                    .map(|(name, total)| (name.to_string(), total.format_with_symbol(symbol)))
                    .collect(),
            ),
        };

        let summary = summarize(transactions);

        Self {
            rows,
            summary_text: SummaryView::new(&summary, symbol),
            summary,
            categories,
        }
    }

    /// True when no row passed the filter
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
