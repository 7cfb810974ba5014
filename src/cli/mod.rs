//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod entry;
pub mod export;
pub mod history;

pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportCommands, SnapshotFormat};
pub use history::handle_history_command;
