//! Core data models for pocket-ledger
//!
//! A ledger is a flat list of income and expense entries; these are the
//! types that describe one entry and its raw input form.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{parse_date, Entry, EntryDraft, Kind, Transaction, DATE_FORMAT};
