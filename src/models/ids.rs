//! Transaction identifiers
//!
//! Ids are time-derived (milliseconds since the Unix epoch) and bumped past the
//! largest id already issued, so sequential allocation never collides even when
//! several entries land in the same millisecond.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a single ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Allocate the next id after `last`, using `now_millis` when it is larger
    pub fn next_after(last: Option<TransactionId>, now_millis: u64) -> Self {
        match last {
            Some(last) if last.0 >= now_millis => Self(last.0.saturating_add(1)),
            _ => Self(now_millis),
        }
    }

    /// Parse an ID from a string
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        s.trim().parse()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TransactionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_uses_clock() {
        let id = TransactionId::next_after(None, 1_715_000_000_000);
        assert_eq!(id.raw(), 1_715_000_000_000);

        let id = TransactionId::next_after(Some(TransactionId::from_raw(5)), 1_715_000_000_000);
        assert_eq!(id.raw(), 1_715_000_000_000);
    }

    #[test]
    fn test_next_after_same_millisecond() {
        let last = TransactionId::from_raw(1_715_000_000_000);
        let id = TransactionId::next_after(Some(last), 1_715_000_000_000);
        assert_eq!(id.raw(), 1_715_000_000_001);
    }

    #[test]
    fn test_next_after_clock_went_backwards() {
        let last = TransactionId::from_raw(2_000);
        let id = TransactionId::next_after(Some(last), 1_000);
        assert_eq!(id.raw(), 2_001);
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::from_raw(1_715_000_000_000);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "1715000000000");
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(TransactionId::parse(" 42 ").unwrap().raw(), 42);
        assert!("abc".parse::<TransactionId>().is_err());
    }
}
