//! # Money
//!
//! Monetary amounts as signed integers in hundredths of the major unit:
//! sen for IDR, cents for USD. Receipts carry decimal amounts (a tax line of
//! `1357.95` is legal), so every currency is held at two fraction digits and
//! the formatter trims the ones that are zero.
//!
//! On the wire an amount is a plain JSON number in major units. Integers and
//! decimals are both accepted; decimals are rounded half away from zero to
//! the nearest hundredth.
//!
//! ```
//! use struk::money::Money;
//!
//! let price = Money::from_major(15_000);
//! assert_eq!(price.minor(), 1_500_000);
//! assert_eq!((-price).minor(), -1_500_000);
//!
//! let tax: Money = serde_json::from_str("1357.95").unwrap();
//! assert_eq!(tax, Money::from_minor(135_795));
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Neg;

/// Fraction digits held by every [`Money`] value.
pub const MINOR_DIGITS: u32 = 2;

/// Minor units per major unit.
pub const SCALE: i64 = 10i64.pow(MINOR_DIGITS);

/// A monetary value in hundredths of the major unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a value from hundredths of the major unit.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a value from whole major units (`15000` is `Rp 15.000`).
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major.saturating_mul(SCALE))
    }

    /// Rounds a decimal major-unit amount to the nearest hundredth.
    ///
    /// Returns `None` for NaN, infinities and values outside the `i64` range.
    pub fn from_decimal(major: f64) -> Option<Self> {
        let scaled = (major * SCALE as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            return None;
        }
        Some(Money(scaled as i64))
    }

    /// The value in hundredths of the major unit.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value as unsigned, total for `i64::MIN`.
    #[inline]
    pub const fn unsigned_abs(&self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(self.0.wrapping_neg())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % SCALE == 0 {
            serializer.serialize_i64(self.0 / SCALE)
        } else {
            serializer.serialize_f64(self.0 as f64 / SCALE as f64)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an amount in major currency units")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(SCALE)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount {} out of range", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .map_err(|_| E::custom(format!("amount {} out of range", v)))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_decimal(v).ok_or_else(|| E::custom(format!("amount {} out of range", v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_helpers() {
        assert!(Money::from_minor(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_minor(-1).is_negative());
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(15000).minor(), 1_500_000);
        assert_eq!(Money::from_major(-5).minor(), -500);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Money::from_major(5000), Money::from_major(-5000));
        assert_eq!(-Money::zero(), Money::zero());
    }

    #[test]
    fn test_unsigned_abs() {
        assert_eq!(Money::from_minor(-42).unsigned_abs(), 42);
        assert_eq!(Money::from_minor(i64::MIN).unsigned_abs(), 1u64 << 63);
    }

    #[test]
    fn test_from_decimal_rounds_to_hundredths() {
        assert_eq!(Money::from_decimal(1357.95), Some(Money::from_minor(135_795)));
        assert_eq!(Money::from_decimal(0.005), Some(Money::from_minor(1)));
        assert_eq!(Money::from_decimal(-5.5), Some(Money::from_minor(-550)));
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_decimal(1e30), None);
    }

    #[test]
    fn test_serde_whole_amount_is_integer() {
        let m: Money = serde_json::from_str("30000").unwrap();
        assert_eq!(m, Money::from_major(30000));
        assert_eq!(serde_json::to_string(&m).unwrap(), "30000");
    }

    #[test]
    fn test_serde_decimal_amount() {
        let m: Money = serde_json::from_str("1357.95").unwrap();
        assert_eq!(m, Money::from_minor(135_795));
        assert_eq!(serde_json::to_string(&m).unwrap(), "1357.95");

        let m: Money = serde_json::from_str("-0.5").unwrap();
        assert_eq!(m, Money::from_minor(-50));
    }

    #[test]
    fn test_serde_rejects_non_numbers() {
        assert!(serde_json::from_str::<Money>("\"15000\"").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>(&u64::MAX.to_string()).is_err());
    }
}
