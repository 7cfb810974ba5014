//! Display formatting for terminal output
//!
//! [`view`] builds the presentation model; [`ledger`] renders it as text.

pub mod ledger;
pub mod view;

pub use ledger::{
    format_categories, format_history, format_ledger_view, format_rows, format_summary,
    format_transaction_details, NO_ENTRIES, NO_EXPENSE_DATA,
};
pub use view::{CategoryView, LedgerView, RowView, SummaryView};
