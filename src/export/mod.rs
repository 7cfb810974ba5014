//! Export module for pocket-ledger
//!
//! Writes the ledger out in several formats:
//! - CSV: one row per entry (spreadsheet-compatible)
//! - Report: printable plain-text statement
//! - JSON / YAML: full snapshot with summary and metadata
//!
//! Every exporter refuses an empty ledger.

pub mod csv;
pub mod json;
pub mod report;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_snapshot_json, import_snapshot_json, Snapshot, EXPORT_SCHEMA_VERSION};
pub use report::{export_report, REPORT_SUBTITLE};
pub use yaml::{export_snapshot_yaml, import_snapshot_yaml};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Message used when there is nothing to export
pub const NO_DATA: &str = "No data to export";

fn ensure_not_empty(transactions: &[Transaction]) -> LedgerResult<()> {
    if transactions.is_empty() {
        Err(LedgerError::Export(NO_DATA.to_string()))
    } else {
        Ok(())
    }
}
