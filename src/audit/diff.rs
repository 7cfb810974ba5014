//! Change summaries for audit entries
//!
//! Compares two versions of a transaction field by field and renders the
//! differences as `field: old -> new` pairs.

use crate::models::Transaction;

/// Longest text value shown in a summary before truncation
const MAX_VALUE_CHARS: usize = 40;

/// Describe what changed between two versions of the same transaction
///
/// Returns `None` when nothing but the id would be compared equal.
pub fn describe_changes(before: &Transaction, after: &Transaction) -> Option<String> {
    let mut changes = Vec::new();

    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.category != after.category {
        changes.push(format!(
            "category: {} -> {}",
            quote(&before.category),
            quote(&after.category)
        ));
    }
    if before.kind != after.kind {
        changes.push(format!("kind: {} -> {}", before.kind, after.kind));
    }
    if before.date != after.date {
        changes.push(format!(
            "date: {} -> {}",
            before.date_string(),
            after.date_string()
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn quote(s: &str) -> String {
    if s.chars().count() > MAX_VALUE_CHARS {
        let head: String = s.chars().take(MAX_VALUE_CHARS - 3).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", s)
    }
}
