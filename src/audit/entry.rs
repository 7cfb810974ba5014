//! Audit entry data structures
//!
//! One entry per ledger mutation, with the transaction as it was before
//! and/or after the operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionId};

use super::diff::describe_changes;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entry was added
    Create,
    /// Entry was edited
    Update,
    /// Entry was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected transaction
    pub transaction_id: TransactionId,

    /// The transaction before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Transaction>,

    /// The transaction after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Transaction>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    pub fn create(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            transaction_id: txn.id,
            before: None,
            after: Some(txn.clone()),
            changes: None,
        }
    }

    pub fn update(before: &Transaction, after: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            transaction_id: after.id,
            before: Some(before.clone()),
            after: Some(after.clone()),
            changes: describe_changes(before, after),
        }
    }

    pub fn delete(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            transaction_id: txn.id,
            before: Some(txn.clone()),
            after: None,
            changes: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.transaction_id
        );

        if let Some(txn) = self.after.as_ref().or(self.before.as_ref()) {
            output.push_str(&format!(" ({})", txn));
        }

        if let Some(changes) = &self.changes {
            output.push_str(&format!("\n  Changes: {}", changes));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, Kind};

    fn txn(amount: &str) -> Transaction {
        let entry = EntryDraft::new(amount, "Food", Kind::Expense, "2024-05-03")
            .validate()
            .unwrap();
        Transaction::from_entry(TransactionId::from_raw(42), entry)
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&txn("200"));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.transaction_id.raw(), 42);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry_has_changes() {
        let entry = AuditEntry::update(&txn("200"), &txn("250"));

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.changes.as_deref(), Some("amount: 200 -> 250"));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&txn("200"));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(&txn("200"));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"create\""));
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.after, Some(txn("200")));
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::update(&txn("200"), &txn("250")).format_human_readable();
        assert!(formatted.contains("UPDATE"));
        assert!(formatted.contains("42"));
        assert!(formatted.contains("Changes: amount: 200 -> 250"));
    }
}
