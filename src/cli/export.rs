//! CLI commands for data export
//!
//! Each export is rendered in memory first, so a refused or failed export
//! never leaves a partial file behind. Snapshots are also read back and
//! compared with the ledger before they are written.

use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{
    export_report, export_snapshot_json, export_snapshot_yaml, export_transactions_csv,
    import_snapshot_json, import_snapshot_yaml,
};
use crate::services::Ledger;
use crate::storage::{write_text_atomic, Store};

/// Snapshot format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    /// JSON (machine-readable)
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all entries to CSV
    Csv {
        /// Output file path
        output: PathBuf,
    },

    /// Export a printable text report
    Report {
        /// Output file path
        output: PathBuf,
    },

    /// Export a full snapshot with summary
    Snapshot {
        /// Output file path
        output: PathBuf,

        /// Snapshot format
        #[arg(short, long, value_enum, default_value = "json")]
        format: SnapshotFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle export commands
pub fn handle_export_command<S: Store>(
    ledger: &Ledger<S>,
    settings: &Settings,
    cmd: ExportCommands,
) -> LedgerResult<()> {
    let transactions = ledger.transactions();
    let symbol = settings.currency_symbol.as_str();
    let mut buffer = Vec::new();

    let (output, what) = match cmd {
        ExportCommands::Csv { output } => {
            export_transactions_csv(transactions, symbol, &mut buffer)?;
            (output, "CSV")
        }
        ExportCommands::Report { output } => {
            export_report(transactions, symbol, &mut buffer)?;
            (output, "report")
        }
        ExportCommands::Snapshot {
            output,
            format,
            pretty,
        } => {
            match format {
                SnapshotFormat::Json => export_snapshot_json(transactions, &mut buffer, pretty)?,
                SnapshotFormat::Yaml => export_snapshot_yaml(transactions, &mut buffer)?,
            }
            verify_snapshot(&buffer, format, ledger)?;
            (output, "snapshot")
        }
    };

    write_output(&output, buffer)?;
    println!(
        "Exported {} entries ({}) to {}",
        transactions.len(),
        what,
        output.display()
    );

    Ok(())
}

/// Read a rendered snapshot back and check it holds exactly the ledger's entries
fn verify_snapshot<S: Store>(
    buffer: &[u8],
    format: SnapshotFormat,
    ledger: &Ledger<S>,
) -> LedgerResult<()> {
    let text = std::str::from_utf8(buffer)
        .map_err(|e| LedgerError::Export(format!("Export produced invalid UTF-8: {}", e)))?;
    let snapshot = match format {
        SnapshotFormat::Json => import_snapshot_json(text)?,
        SnapshotFormat::Yaml => import_snapshot_yaml(text)?,
    };

    if snapshot.transactions != ledger.transactions() {
        return Err(LedgerError::Export(
            "Snapshot does not read back to the same entries".to_string(),
        ));
    }
    Ok(())
}

fn write_output(path: &Path, buffer: Vec<u8>) -> LedgerResult<()> {
    let contents = String::from_utf8(buffer)
        .map_err(|e| LedgerError::Export(format!("Export produced invalid UTF-8: {}", e)))?;
    write_text_atomic(path, &contents)
        .map_err(|e| LedgerError::Export(format!("Failed to write {}: {}", path.display(), e)))
}
