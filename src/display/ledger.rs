//! Terminal rendering of ledger views
//!
//! Turns the presentation model into plain text. Nothing here touches the
//! ledger itself.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::audit::AuditEntry;
use crate::models::Transaction;

use super::view::{CategoryView, LedgerView, SummaryView};

/// Shown in place of the table when no entry passes the filter
pub const NO_ENTRIES: &str = "No entries found.";

/// Shown in place of the category breakdown when there is nothing to break down
pub const NO_EXPENSE_DATA: &str = "No expense data";

/// Render a full listing screen: table, summary and category breakdown
pub fn format_ledger_view(view: &LedgerView) -> String {
    let mut output = String::new();

    output.push_str(&format_rows(view));
    output.push('\n');
    output.push_str(&format_summary(&view.summary_text));
    output.push('\n');
    output.push_str(&format_categories(&view.categories));

    output
}

/// Render only the listing table (or the empty placeholder)
pub fn format_rows(view: &LedgerView) -> String {
    if view.is_empty() {
        return format!("{}\n", NO_ENTRIES);
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Amount", "Category", "Type", "Date"]);
    for row in &view.rows {
        builder.push_record([
            row.id.to_string(),
            row.amount.clone(),
            row.category.clone(),
            row.kind.clone(),
            row.date.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Render the income / expense / balance lines
pub fn format_summary(summary: &SummaryView) -> String {
    format!(
        "Income:  {}\nExpense: {}\nBalance: {}\n",
        summary.income, summary.expense, summary.balance
    )
}

/// Render expense totals per category
pub fn format_categories(categories: &CategoryView) -> String {
    match categories {
        CategoryView::NoExpenseData => format!("{}\n", NO_EXPENSE_DATA),
        CategoryView::Totals(totals) if totals.is_empty() => format!("{}\n", NO_EXPENSE_DATA),
        CategoryView::Totals(totals) => {
            let width = totals
                .iter()
                .map(|(name, _)| name.chars().count())
                .max()
                .unwrap_or(0);

            let mut output = String::from("Expenses by category:\n");
            for (name, total) in totals {
                output.push_str(&format!("  {:width$}  {}\n", name, total, width = width));
            }
            output
        }
    }
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:    {}\n", txn.id));
    output.push_str(&format!("Date:     {}\n", txn.date_string()));
    output.push_str(&format!("Amount:   {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Type:     {}\n", txn.kind));

    if txn.category.is_empty() {
        output.push_str("Category: (none)\n");
    } else {
        output.push_str(&format!("Category: {}\n", txn.category));
    }

    output
}

/// Render audit entries, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    entries
        .iter()
        .map(|entry| format!("{}\n", entry.format_human_readable()))
        .collect()
}
