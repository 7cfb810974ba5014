//! pocket-ledger - local-first income and expense ledger
//!
//! This library provides the core of the `pocket` command: a ledger of
//! income and expense entries kept as a single JSON blob, with filtering,
//! totals, exports and an audit journal of every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, ids, entries)
//! - `storage`: Blob stores and the ledger codec
//! - `services`: The ledger and its filters
//! - `reports`: Totals by kind and by category
//! - `display`: Presentation model and terminal rendering
//! - `export`: CSV, report and snapshot writers
//! - `audit`: Audit logging system
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::config::{LedgerPaths, Settings};
//! use pocket_ledger::services::Ledger;
//! use pocket_ledger::storage::FileStore;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut ledger = Ledger::load(FileStore::new(paths.data_dir()), &settings.storage_key)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
