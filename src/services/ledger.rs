//! The ledger
//!
//! Owns the ordered list of entries, validates and applies changes, and saves
//! the complete list through a [`Store`] after every successful change. A
//! change is committed in memory only once the save has gone through, so a
//! failed save leaves the ledger exactly as it was.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryDraft, Transaction, TransactionId};
use crate::reports::{summarize, Summary};
use crate::storage::{decode_transactions, encode_transactions, Store};

use super::filter::TransactionFilter;

/// Default key the ledger blob is stored under
pub const DEFAULT_STORAGE_KEY: &str = "expenses";

/// In-memory ledger backed by a blob store
pub struct Ledger<S: Store> {
    store: S,
    key: String,
    transactions: Vec<Transaction>,
    /// Largest id ever issued or loaded; new ids always go above it
    last_id: Option<TransactionId>,
    audit: Option<AuditLogger>,
}

impl<S: Store> Ledger<S> {
    /// Load the ledger stored under `key`
    ///
    /// Missing or unreadable content yields an empty ledger. Only a failure of
    /// the store itself is reported as an error.
    pub fn load(store: S, key: impl Into<String>) -> LedgerResult<Self> {
        let key = key.into();

        let transactions = match store.load(&key)? {
            None => {
                debug!(key = %key, "no stored ledger, starting empty");
                Vec::new()
            }
            Some(blob) => match decode_transactions(&blob) {
                Ok(transactions) => transactions,
                Err(e) => {
                    warn!(key = %key, error = %e, "stored ledger is malformed, starting empty");
                    Vec::new()
                }
            },
        };

        let last_id = transactions.iter().map(|t| t.id).max();
        debug!(key = %key, count = transactions.len(), "ledger loaded");

        Ok(Self {
            store,
            key,
            transactions,
            last_id,
            audit: None,
        })
    }

    /// Record every change in an audit journal
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// All entries in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    /// Look up an entry by id
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Validate and append a new entry
    pub fn add(&mut self, draft: &EntryDraft) -> LedgerResult<Transaction> {
        let entry = draft.validate()?;
        let id = TransactionId::next_after(self.last_id, now_millis());
        let txn = Transaction::from_entry(id, entry);

        let mut next = self.transactions.clone();
        next.push(txn.clone());
        self.commit(next)?;
        self.last_id = Some(id);

        info!(id = %txn.id, amount = %txn.amount, kind = %txn.kind, "entry added");
        self.record(AuditEntry::create(&txn));
        Ok(txn)
    }

    /// Replace every field of an existing entry except its id
    pub fn update(&mut self, id: TransactionId, draft: &EntryDraft) -> LedgerResult<Transaction> {
        let entry = draft.validate()?;
        let index = self
            .position(id)
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        let before = self.transactions[index].clone();
        let mut next = self.transactions.clone();
        next[index].apply(entry);
        let after = next[index].clone();
        self.commit(next)?;

        info!(id = %id, "entry updated");
        self.record(AuditEntry::update(&before, &after));
        Ok(after)
    }

    /// Delete an entry, returning it
    ///
    /// An unknown id is an error and nothing is saved.
    pub fn remove(&mut self, id: TransactionId) -> LedgerResult<Transaction> {
        let index = self
            .position(id)
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        let mut next = self.transactions.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(id = %id, "entry deleted");
        self.record(AuditEntry::delete(&removed));
        Ok(removed)
    }

    /// Entries matching `filter`, in insertion order
    pub fn query(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| filter.matches(t))
            .collect()
    }

    /// Income, expense and balance over the whole ledger
    pub fn summary(&self) -> Summary {
        summarize(&self.transactions)
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    /// Save `next` as the full ledger, then adopt it
    fn commit(&mut self, next: Vec<Transaction>) -> LedgerResult<()> {
        let blob = encode_transactions(&next)?;
        self.store.save(&self.key, &blob)?;
        debug!(key = %self.key, count = next.len(), "ledger saved");
        self.transactions = next;
        Ok(())
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, path = %logger.path().display(), "failed to write audit entry");
            }
        }
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
