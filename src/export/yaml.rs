//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a form that is easier to read by eye.

use std::io::Write;

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::Snapshot;
use crate::models::Transaction;

use super::ensure_not_empty;

/// Export the full ledger to YAML
pub fn export_snapshot_yaml<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> LedgerResult<()> {
    ensure_not_empty(transactions)?;
    let snapshot = Snapshot::from_transactions(transactions);

    let export_err = |e: std::io::Error| LedgerError::Export(e.to_string());
    writeln!(writer, "# pocket-ledger snapshot").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", snapshot.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(&mut *writer, &snapshot)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    info!(rows = transactions.len(), "exported YAML snapshot");
    Ok(())
}

/// Read a YAML snapshot back (for verification)
pub fn import_snapshot_yaml(yaml_str: &str) -> LedgerResult<Snapshot> {
    let snapshot: Snapshot =
        serde_yaml::from_str(yaml_str).map_err(|e| LedgerError::Validation(e.to_string()))?;
    snapshot.validate().map_err(LedgerError::Validation)?;
    Ok(snapshot)
}
