//! Money type for representing currency amounts
//!
//! Amounts are held as a `rust_decimal::Decimal` so totals do not drift the
//! way summed floats do. An amount accepts any finite non-negative number a
//! user can type (`500`, `12.345`, `1e2`) and keeps exactly the decimal value
//! that number denotes. The persisted form is a plain JSON number in whole
//! units (`500`, `12.5`) so blobs stay readable.
//!
//! Every amount passes through [`Money::from_units_f64`], whether it comes
//! from the command line or from a stored blob, so anything that can be saved
//! can also be loaded back.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Largest magnitude of a single amount, in whole units.
///
/// This is the largest integer a float represents exactly. Sums of amounts
/// below it stay far inside `Decimal`'s range.
pub const MAX_UNITS: f64 = 9_007_199_254_740_991.0;

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.5");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2).normalize())
    }

    /// Create a Money amount from whole units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a zero Money amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// The amount as a float in whole units
    pub fn as_units(&self) -> f64 {
        self.0.normalize().to_string().parse().unwrap_or(0.0)
    }

    /// Convert a float in whole units
    ///
    /// The amount keeps the shortest decimal that reads back as `units`, so
    /// `12.345` stays `12.345` rather than the float's binary expansion.
    pub fn from_units_f64(units: f64) -> Result<Self, MoneyParseError> {
        if !units.is_finite() || units.abs() > MAX_UNITS {
            return Err(MoneyParseError::OutOfRange(units.to_string()));
        }

        Decimal::from_str(&units.to_string())
            .map(|value| Self(value.normalize()))
            .map_err(|_| MoneyParseError::OutOfRange(units.to_string()))
    }

    /// Parse a user-entered amount
    ///
    /// Accepts any finite non-negative number: "500", "12.5", "12.345",
    /// ".5", "7.", "1e2". Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let lower = s.to_ascii_lowercase();
        if lower.contains("inf") || lower.contains("nan") {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let units: f64 = s
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        if units < 0.0 {
            return Err(MoneyParseError::Negative(s.to_string()));
        }

        Self::from_units_f64(units).map_err(|_| MoneyParseError::OutOfRange(s.to_string()))
    }

    /// Format with a currency symbol, e.g. `Rs 500`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{} {}", symbol, -*self)
        } else {
            format!("{} {}", symbol, self)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Shortest decimal form: `500`, `12.5`, `12.05`, `-3`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract().is_zero() {
            if let Some(units) = self.0.to_i64() {
                return serializer.serialize_i64(units);
            }
        }
        serializer.serialize_f64(self.as_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Money::from_units_f64(units).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Serde helpers that write an amount as its exact decimal string
///
/// Meant for totals, which can exceed what a single amount may hold.
pub mod exact {
    use super::Money;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(money)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let text = String::deserialize(deserializer)?;
        Decimal::from_str(text.trim())
            .map(|value| Money(value.normalize()))
            .map_err(serde::de::Error::custom)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    Negative(String),
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is required"),
            MoneyParseError::Negative(s) => write!(f, "Amount cannot be negative: {}", s),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount is out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
