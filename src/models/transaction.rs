//! Transaction model
//!
//! A ledger entry is either income or an expense, carries a non-negative
//! amount, a free-text category and a calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Fixed storage and input format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether an entry adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Kind {
    Income,
    #[default]
    Expense,
}

impl Kind {
    /// The label used in listings, exports and search
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Kind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            _ => Err(LedgerError::Validation(format!(
                "Invalid type: '{}'. Use Income or Expense",
                s
            ))),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Non-negative amount
    pub amount: Money,

    /// Free-text category label
    #[serde(default)]
    pub category: String,

    /// Income or expense; older blobs call this field `type`
    #[serde(alias = "type")]
    pub kind: Kind,

    /// Calendar date, stored as YYYY-MM-DD
    pub date: NaiveDate,
}

impl Transaction {
    /// Build a transaction from an id and validated fields
    pub fn from_entry(id: TransactionId, entry: Entry) -> Self {
        Self {
            id,
            amount: entry.amount,
            category: entry.category,
            kind: entry.kind,
            date: entry.date,
        }
    }

    /// Replace every field except the id
    pub fn apply(&mut self, entry: Entry) {
        self.amount = entry.amount;
        self.category = entry.category;
        self.kind = entry.kind;
        self.date = entry.date;
    }

    pub fn is_expense(&self) -> bool {
        self.kind == Kind::Expense
    }

    /// Two-digit month component of the date ("01".."12")
    pub fn month(&self) -> String {
        self.date.format("%m").to_string()
    }

    /// Date in its stored text form
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Convert back into a draft, e.g. to pre-fill an edit form
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            amount: self.amount.to_string(),
            category: self.category.clone(),
            kind: self.kind,
            date: self.date_string(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date_string(),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Raw user input for creating or updating an entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryDraft {
    pub amount: String,
    pub category: String,
    pub kind: Kind,
    pub date: String,
}

impl EntryDraft {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        kind: Kind,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            kind,
            date: date.into(),
        }
    }

    /// Check presence and format of the required fields
    pub fn validate(&self) -> LedgerResult<Entry> {
        let amount =
            Money::parse(&self.amount).map_err(|e| LedgerError::Validation(e.to_string()))?;
        let date = parse_date(&self.date)?;

        Ok(Entry {
            amount,
            category: self.category.clone(),
            kind: self.kind,
            date,
        })
    }
}

/// Validated entry fields, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub amount: Money,
    pub category: String,
    pub kind: Kind,
    pub date: NaiveDate,
}

/// Parse a YYYY-MM-DD date, rejecting anything that does not round-trip
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(LedgerError::Validation("Date is required".into()));
    }

    let invalid = || LedgerError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s));
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(DATE_FORMAT).to_string() != s {
        return Err(invalid());
    }
    Ok(date)
}
