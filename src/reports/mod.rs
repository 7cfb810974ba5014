//! Reports module for pocket-ledger
//!
//! Totals by kind and expense breakdowns by category.

pub mod summary;

pub use summary::{summarize, summarize_by_category, CategoryTotals, Summary};
