//! Ledger blob encoding
//!
//! The persisted form is a JSON array of objects with the fields `id`,
//! `amount`, `category`, `kind` and `date`. Decoding is strict: a blob that
//! fails to parse, carries a negative amount or repeats an id is rejected as a
//! whole, and the caller decides how to degrade.

use std::collections::HashSet;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Serialize the full transaction sequence
pub fn encode_transactions(transactions: &[Transaction]) -> LedgerResult<String> {
    serde_json::to_string(transactions)
        .map_err(|e| LedgerError::Json(format!("Failed to serialize ledger: {}", e)))
}

/// Deserialize a transaction sequence, checking the ledger invariants
pub fn decode_transactions(blob: &str) -> LedgerResult<Vec<Transaction>> {
    // A stored JSON null means the ledger was cleared
    if blob.trim() == "null" {
        return Ok(Vec::new());
    }

    let transactions: Vec<Transaction> = serde_json::from_str(blob)
        .map_err(|e| LedgerError::Json(format!("Failed to parse ledger: {}", e)))?;

    let mut seen = HashSet::with_capacity(transactions.len());
    for txn in &transactions {
        if txn.amount.is_negative() {
            return Err(LedgerError::Json(format!(
                "Transaction {} has a negative amount",
                txn.id
            )));
        }
        if !seen.insert(txn.id) {
            return Err(LedgerError::Json(format!("Duplicate transaction id {}", txn.id)));
        }
    }

    Ok(transactions)
}
