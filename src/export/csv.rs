//! CSV Export functionality
//!
//! One row per entry in ledger order, under the header
//! `Amount (<symbol>),Category,Type,Date`. Fields containing commas, quotes
//! or newlines are quoted.

use std::io::Write;

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

use super::ensure_not_empty;

/// Export all entries to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    symbol: &str,
    writer: W,
) -> LedgerResult<()> {
    ensure_not_empty(transactions)?;

    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record([
        format!("Amount ({})", symbol).as_str(),
        "Category",
        "Type",
        "Date",
    ])?;

    for txn in transactions {
        csv.write_record([
            txn.amount.to_string(),
            txn.category.clone(),
            txn.kind.to_string(),
            txn.date_string(),
        ])?;
    }

    csv.flush()
        .map_err(|e| LedgerError::Export(format!("Failed to flush CSV: {}", e)))?;

    info!(rows = transactions.len(), "exported CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::NO_DATA;
    use crate::models::{EntryDraft, Kind, TransactionId};

    fn txn(id: u64, amount: &str, category: &str, kind: Kind, date: &str) -> Transaction {
        let entry = EntryDraft::new(amount, category, kind, date).validate().unwrap();
        Transaction::from_entry(TransactionId::from_raw(id), entry)
    }

    fn export(transactions: &[Transaction]) -> String {
        let mut output = Vec::new();
        export_transactions_csv(transactions, "Rs", &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let csv = export(&[
            txn(1, "500", "Salary", Kind::Income, "2024-05-01"),
            txn(2, "12.5", "Food", Kind::Expense, "2024-05-03"),
        ]);

        assert_eq!(
            csv,
            "Amount (Rs),Category,Type,Date\n\
             500,Salary,Income,2024-05-01\n\
             12.5,Food,Expense,2024-05-03\n"
        );
    }

    #[test]
    fn test_csv_quotes_special_fields() {
        let csv = export(&[txn(1, "5", "Coffee, tea", Kind::Expense, "2024-05-01")]);
        assert!(csv.contains("5,\"Coffee, tea\",Expense,2024-05-01"));
    }

    #[test]
    fn test_csv_uses_configured_symbol() {
        let mut output = Vec::new();
        export_transactions_csv(
            &[txn(1, "5", "Food", Kind::Expense, "2024-05-01")],
            "$",
            &mut output,
        )
        .unwrap();
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("Amount ($),Category,Type,Date\n"));
    }

    #[test]
    fn test_empty_ledger_is_refused() {
        let mut output = Vec::new();
        let err = export_transactions_csv(&[], "Rs", &mut output).unwrap_err();

        assert_eq!(err.to_string(), format!("Export error: {}", NO_DATA));
        assert!(output.is_empty());
    }
}
