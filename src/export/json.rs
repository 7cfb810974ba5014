//! JSON Export functionality
//!
//! Exports the whole ledger as a versioned snapshot.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{money, Money, Transaction};
use crate::reports::summarize;

use super::ensure_not_empty;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.1.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub summary: SnapshotSummary,

    pub transactions: Vec<Transaction>,
}

/// Totals recorded alongside the entries
///
/// Totals are written as exact decimal strings since they may be larger than
/// any single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    pub transaction_count: usize,
    #[serde(with = "money::exact")]
    pub total_income: Money,
    #[serde(with = "money::exact")]
    pub total_expense: Money,
    #[serde(with = "money::exact")]
    pub balance: Money,
    pub earliest_date: Option<String>,
    pub latest_date: Option<String>,
}

impl Snapshot {
    /// Capture the given entries
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let totals = summarize(transactions);

        let summary = SnapshotSummary {
            transaction_count: transactions.len(),
            total_income: totals.total_income,
            total_expense: totals.total_expense,
            balance: totals.balance,
            earliest_date: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_date: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary,
            transactions: transactions.to_vec(),
        }
    }

    /// Check a snapshot read back from disk
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.summary.transaction_count != self.transactions.len() {
            return Err(format!(
                "Snapshot claims {} entries but contains {}",
                self.summary.transaction_count,
                self.transactions.len()
            ));
        }

        let mut seen = HashSet::new();
        for txn in &self.transactions {
            if !seen.insert(txn.id) {
                return Err(format!("Duplicate entry id {}", txn.id));
            }
        }

        Ok(())
    }
}

/// Export the full ledger to JSON
pub fn export_snapshot_json<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    ensure_not_empty(transactions)?;
    let snapshot = Snapshot::from_transactions(transactions);

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    info!(rows = transactions.len(), "exported JSON snapshot");
    Ok(())
}

/// Read a JSON snapshot back (for verification)
pub fn import_snapshot_json(json_str: &str) -> LedgerResult<Snapshot> {
    let snapshot: Snapshot = serde_json::from_str(json_str)?;
    snapshot.validate().map_err(LedgerError::Validation)?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, Kind, TransactionId};

    fn txn(id: u64, amount: &str, kind: Kind, date: &str) -> Transaction {
        let entry = EntryDraft::new(amount, "Misc", kind, date).validate().unwrap();
        Transaction::from_entry(TransactionId::from_raw(id), entry)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, "500", Kind::Income, "2024-05-01"),
            txn(2, "200", Kind::Expense, "2024-04-03"),
        ]
    }

    #[test]
    fn test_snapshot_summary() {
        let snapshot = Snapshot::from_transactions(&sample());

        assert_eq!(snapshot.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(snapshot.summary.transaction_count, 2);
        assert_eq!(snapshot.summary.balance, Money::from_units(300));
        assert_eq!(snapshot.summary.earliest_date.as_deref(), Some("2024-04-03"));
        assert_eq!(snapshot.summary.latest_date.as_deref(), Some("2024-05-01"));
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_json_export_reads_back() {
        let mut output = Vec::new();
        export_snapshot_json(&sample(), &mut output, true).unwrap();

        let imported = import_snapshot_json(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(imported.transactions, sample());
    }

    #[test]
    fn test_snapshot_totals_above_entry_limit_read_back() {
        let transactions = vec![
            txn(1, "9007199254740991", Kind::Expense, "2024-05-01"),
            txn(2, "9007199254740991", Kind::Expense, "2024-05-02"),
            txn(3, "0.5", Kind::Income, "2024-05-03"),
        ];

        let mut output = Vec::new();
        export_snapshot_json(&transactions, &mut output, false).unwrap();
        let json = String::from_utf8(output).unwrap();
        assert!(json.contains(r#""total_expense":"18014398509481982""#));

        let imported = import_snapshot_json(&json).unwrap();
        assert_eq!(imported.transactions, transactions);
        assert_eq!(imported.summary.balance.to_string(), "-18014398509481981.5");
    }

    #[test]
    fn test_import_rejects_other_schema() {
        let mut snapshot = Snapshot::from_transactions(&sample());
        snapshot.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&snapshot).unwrap();

        assert!(import_snapshot_json(&json).unwrap_err().is_validation());
    }

    #[test]
    fn test_empty_ledger_is_refused() {
        let mut output = Vec::new();
        assert!(export_snapshot_json(&[], &mut output, false).is_err());
    }
}
