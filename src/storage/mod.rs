//! Storage layer for pocket-ledger
//!
//! The ledger persists itself as one opaque text blob under a fixed key. A
//! [`Store`] is anything that can load and save such blobs; [`FileStore`]
//! keeps one JSON file per key, [`MemoryStore`] keeps them in a map.
//!
//! Saves are full overwrites (last writer wins). Nothing here isolates two
//! processes sharing the same data directory.

pub mod codec;
pub mod file_io;

pub use codec::{decode_transactions, encode_transactions};
pub use file_io::{read_text, write_text_atomic};

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};

/// Key-value blob store used for ledger persistence
pub trait Store {
    /// Load the blob stored under `key`, or `None` if nothing was saved yet
    fn load(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn save(&mut self, key: &str, value: &str) -> LedgerResult<()>;
}

/// One `<key>.json` file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first save)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing a key
    pub fn path_for(&self, key: &str) -> LedgerResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Store for FileStore {
    fn load(&self, key: &str) -> LedgerResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn save(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }
}

/// In-memory store, handy for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, as if it had been saved by an earlier session
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Raw blob for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful saves since creation
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Store for MemoryStore {
    fn load(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.saves += 1;
        Ok(())
    }
}

/// Keys become file names, so only a safe character set is allowed
fn validate_key(key: &str) -> LedgerResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(LedgerError::Storage(format!("Invalid storage key: '{}'", key)))
    }
}
