//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i128) so that sums over any number of
//! records stay exact. Values cross the serialization boundary as decimal
//! numbers with two places.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest magnitude (in cents) accepted from a floating-point amount, 10^18 units.
///
/// A slice of records cannot hold more than 2^64 / 48 entries, and that many
/// amounts of this size still sum well inside `i128`.
pub const MAX_CENTS: i128 = 100_000_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i128);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use ledger_report::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i128) -> Self {
        Self(cents)
    }

    /// Convert a decimal amount, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and magnitudes above [`MAX_CENTS`].
    ///
    /// # Examples
    /// ```
    /// use ledger_report::models::Money;
    /// assert_eq!(Money::from_f64(10.505).map(|m| m.cents()), Some(1051));
    /// assert!(Money::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i128))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i128 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i128 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i128 {
        (self.0 % 100).abs()
    }

    /// Get the amount as a decimal number
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }

    /// Format with an explicit sign, e.g. "+12.00" or "-3.50"
    pub fn format_signed(&self) -> String {
        if self.is_negative() {
            self.to_string()
        } else {
            format!("+{}", self)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_f64_rounds_to_cents() {
        assert_eq!(Money::from_f64(1000.0).unwrap().cents(), 100000);
        assert_eq!(Money::from_f64(19.999).unwrap().cents(), 2000);
        assert_eq!(Money::from_f64(0.1).unwrap().cents(), 10);
        assert!(Money::from_f64(f64::INFINITY).is_none());
        assert!(Money::from_f64(1e300).is_none());
    }

    #[test]
    fn test_from_f64_range() {
        assert_eq!(Money::from_f64(1e15).unwrap().cents(), 100_000_000_000_000_000);
        assert_eq!(Money::from_f64(1e18).unwrap().cents(), MAX_CENTS);
        assert!(Money::from_f64(1e19).is_none());
    }

    #[test]
    fn test_sum_beyond_i64() {
        let total: Money = std::iter::repeat(Money::from_cents(MAX_CENTS)).take(1000).sum();
        assert_eq!(total.cents(), MAX_CENTS * 1000);
        assert!(total.cents() > i64::MAX as i128);
        assert_eq!(total.to_string(), format!("{}000.00", 10i128.pow(18)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_format_variants() {
        assert_eq!(Money::from_cents(-1050).format_with_symbol("$"), "-$10.50");
        assert_eq!(Money::from_cents(1200).format_signed(), "+12.00");
        assert_eq!(Money::from_cents(-30000).format_signed(), "-300.00");
        assert_eq!(Money::zero().format_signed(), "+0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str("10.5").unwrap();
        assert_eq!(m, deserialized);
    }
}
