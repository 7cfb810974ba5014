//! Service layer for pocket-ledger
//!
//! The service layer owns the ledger state on top of the storage layer,
//! handling validation, id allocation, filtering and the audit trail.

pub mod filter;
pub mod ledger;

pub use filter::{parse_category_selector, parse_month_selector, TransactionFilter, ALL};
pub use ledger::{Ledger, DEFAULT_STORAGE_KEY};
