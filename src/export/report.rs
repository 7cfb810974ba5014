//! Printable statement export
//!
//! A plain-text document: title, subtitle, generation time, a table of every
//! entry and the closing totals.

use std::io::Write;

use chrono::Local;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;
use crate::reports::summarize;

use super::ensure_not_empty;

pub const REPORT_SUBTITLE: &str = "Generated for expense management";

/// Title line, e.g. `Personal Expense Report (Rs)`
pub fn report_title(symbol: &str) -> String {
    format!("Personal Expense Report ({})", symbol)
}

/// Write the statement for all entries in ledger order
pub fn export_report<W: Write>(
    transactions: &[Transaction],
    symbol: &str,
    writer: &mut W,
) -> LedgerResult<()> {
    ensure_not_empty(transactions)?;

    let mut builder = Builder::default();
    builder.push_record([
        format!("Amount ({})", symbol),
        "Category".to_string(),
        "Type".to_string(),
        "Date".to_string(),
    ]);
    for txn in transactions {
        builder.push_record([
            txn.amount.format_with_symbol(symbol),
            txn.category.clone(),
            txn.kind.to_string(),
            txn.date_string(),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::ascii());

    let summary = summarize(transactions);
    let document = format!(
        "{title}\n{subtitle}\nGenerated on {generated}\n\n{table}\n\n\
         Total income:  {income}\nTotal expense: {expense}\nBalance:       {balance}\n",
        title = report_title(symbol),
        subtitle = REPORT_SUBTITLE,
        generated = Local::now().format("%Y-%m-%d %H:%M"),
        table = table,
        income = summary.total_income.format_with_symbol(symbol),
        expense = summary.total_expense.format_with_symbol(symbol),
        balance = summary.balance.format_with_symbol(symbol),
    );

    writer
        .write_all(document.as_bytes())
        .map_err(|e| LedgerError::Export(format!("Failed to write report: {}", e)))?;

    info!(rows = transactions.len(), "exported report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, Kind, TransactionId};

    fn txn(id: u64, amount: &str, category: &str, kind: Kind, date: &str) -> Transaction {
        let entry = EntryDraft::new(amount, category, kind, date).validate().unwrap();
        Transaction::from_entry(TransactionId::from_raw(id), entry)
    }

    #[test]
    fn test_report_content() {
        let mut output = Vec::new();
        export_report(
            &[
                txn(1, "500", "Salary", Kind::Income, "2024-05-01"),
                txn(2, "200", "Food", Kind::Expense, "2024-05-03"),
            ],
            "Rs",
            &mut output,
        )
        .unwrap();
        let report = String::from_utf8(output).unwrap();

        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("Personal Expense Report (Rs)"));
        assert_eq!(lines.next(), Some(REPORT_SUBTITLE));
        assert!(report.contains("Amount (Rs)"));
        assert!(report.contains("Rs 500"));
        assert!(report.contains("Rs 200"));
        assert!(report.contains("Balance:       Rs 300"));

        let salary = report.find("Salary").unwrap();
        let food = report.find("Food").unwrap();
        assert!(salary < food);
    }

    #[test]
    fn test_empty_ledger_is_refused() {
        let mut output = Vec::new();
        let err = export_report(&[], "Rs", &mut output).unwrap_err();
        assert!(err.to_string().contains("No data to export"));
    }
}
