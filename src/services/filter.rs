//! Transaction filtering
//!
//! A filter narrows a ledger listing by category, month and free-text search.
//! Every dimension is optional and all present dimensions must match.
//!
//! Search has two modes. Text that parses as a finite number matches amounts
//! that are exactly equal to it, so `100` finds entries of 100 but not a date
//! or category that merely contains "100". Any other text is a
//! case-insensitive substring match against category, type and date.
//! Only decimal and exponent forms count as numbers: hex such as `0x10`,
//! `Infinity` and `NaN` are searched as text.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Value that means "no filter" for category and month selectors
pub const ALL: &str = "All";

/// Options for filtering transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Two-digit month ("01".."12") of the entry date
    pub month: Option<String>,
    /// Amount or text search
    pub search: Option<String>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by two-digit month
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Filter by search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// True when no dimension narrows the result
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.month.is_none() && self.search_mode().is_none()
    }

    /// Check a single transaction against every active dimension
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(category) = &self.category {
            if txn.category != *category {
                return false;
            }
        }

        if let Some(month) = &self.month {
            if txn.month() != *month {
                return false;
            }
        }

        match self.search_mode() {
            Some(SearchMode::Amount(value)) => txn.amount.as_units() == value,
            Some(SearchMode::Text(needle)) => {
                txn.category.to_lowercase().contains(&needle)
                    || txn.kind.label().to_lowercase().contains(&needle)
                    || txn.date_string().contains(&needle)
            }
            None => true,
        }
    }

    fn search_mode(&self) -> Option<SearchMode> {
        let raw = self.search.as_deref()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(SearchMode::Amount(value)),
            _ => Some(SearchMode::Text(raw.to_lowercase())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SearchMode {
    Amount(f64),
    Text(String),
}

/// Normalize a category selector; `All` and blank mean no filter
pub fn parse_category_selector(input: &str) -> Option<String> {
    if input.is_empty() || input == ALL {
        None
    } else {
        Some(input.to_string())
    }
}

/// Normalize a month selector to two digits; `All` and blank mean no filter
pub fn parse_month_selector(input: &str) -> LedgerResult<Option<String>> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }

    match input.parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) && input.len() <= 2 => {
            Ok(Some(format!("{:02}", month)))
        }
        _ => Err(LedgerError::Validation(format!(
            "Invalid month: '{}'. Use 01-12 or All",
            input
        ))),
    }
}
