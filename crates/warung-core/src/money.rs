//! # Money Module
//!
//! Provides the `Money` type for handling rupiah amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupiah                                           │
//! │    IDR is a zero-decimal currency, so the smallest unit is Rp 1.        │
//! │    Every amount in the system is a plain i64 count of rupiah.           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use warung_core::money::Money;
//!
//! let price = Money::from_rupiah(10_000);
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.rupiah(), 30_000);
//! assert_eq!(line_total.to_string(), "Rp 30.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections/refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serialized as a bare number so the
///   persisted blobs stay compatible with `{"price": 10000}` records
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    #[inline]
    pub const fn from_rupiah(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity to produce a line total.
    ///
    /// ## Example
    /// ```rust
    /// use warung_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(15_000);
    /// assert_eq!(unit_price.multiply_quantity(10).rupiah(), 150_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the bare amount with id-ID thousands separators ("10.000").
    ///
    /// Used for report cells that carry the number without the "Rp" prefix.
    pub fn grouped(&self) -> String {
        let digits = self.0.abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        let first_group = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - first_group) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        if self.0 < 0 {
            format!("-{out}")
        } else {
            out
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the Indonesian format used everywhere in the UI: "Rp 10.000".
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-Rp {}", Money(self.0.abs()).grouped())
        } else {
            write!(f, "Rp {}", self.grouped())
        }
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation for revenue totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupiah() {
        let money = Money::from_rupiah(10_000);
        assert_eq!(money.rupiah(), 10_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupiah(0).to_string(), "Rp 0");
        assert_eq!(Money::from_rupiah(500).to_string(), "Rp 500");
        assert_eq!(Money::from_rupiah(10_000).to_string(), "Rp 10.000");
        assert_eq!(Money::from_rupiah(1_500_000).to_string(), "Rp 1.500.000");
        assert_eq!(Money::from_rupiah(-7_500).to_string(), "-Rp 7.500");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(Money::from_rupiah(1).grouped(), "1");
        assert_eq!(Money::from_rupiah(999).grouped(), "999");
        assert_eq!(Money::from_rupiah(1_000).grouped(), "1.000");
        assert_eq!(Money::from_rupiah(123_456_789).grouped(), "123.456.789");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupiah(10_000);
        let b = Money::from_rupiah(2_500);

        assert_eq!((a + b).rupiah(), 12_500);
        assert_eq!((a - b).rupiah(), 7_500);
        assert_eq!((a * 3).rupiah(), 30_000);

        let mut c = a;
        c += b;
        assert_eq!(c.rupiah(), 12_500);
        c -= b;
        assert_eq!(c.rupiah(), 10_000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [10_000, 15_000, 20_000]
            .into_iter()
            .map(Money::from_rupiah)
            .sum();
        assert_eq!(total.rupiah(), 45_000);
    }

    #[test]
    fn test_serde_transparent() {
        let money = Money::from_rupiah(10_000);
        assert_eq!(serde_json::to_string(&money).unwrap(), "10000");
        let parsed: Money = serde_json::from_str("10000").unwrap();
        assert_eq!(parsed, money);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_rupiah(100).is_positive());
        assert!(Money::from_rupiah(-100).is_negative());
    }
}
