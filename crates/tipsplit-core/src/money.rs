//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A split check is worse:                                                │
//! │    $10.01 / 3 = $3.336̄ → everyone pays $3.34 → the table pays $10.02   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1001 cents / 3 rounds to 334 cents per share (×3 = 1002 cents)      │
//! │    We KNOW the table overpays 1 cent, and report it explicitly         │
//! │    (see SplitSummary::rounding_error)                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Every rounding site in the engine rounds **half away from zero**: the
//! half-cent share rounds up, the negative half-cent rounds down. The mode
//! is pinned by tests here and in [`types`](crate::types) because it
//! decides the sign and size of the rounding discrepancy a split reports.
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::{Money, Rate, SplitCount};
//!
//! let subtotal = Money::from_cents(1099); // $10.99
//!
//! // A 20% tip, rounded to the cent
//! let tip = subtotal.tip_at(Rate::from_bps(2000));
//! assert_eq!(tip.cents(), 220);
//!
//! // Each of three people's share of the subtotal
//! let share = subtotal.split_between(SplitCount::from_count(3));
//! assert_eq!(share.cents(), 366);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use ts_rs::TS;

use crate::types::{Rate, SplitCount};

// =============================================================================
// Rounded Division
// =============================================================================

/// Rounded integer division, half away from zero.
///
/// `den` must be positive; `num` may carry either sign. The doubled
/// numerator trick keeps everything in integers: `(2·num ± den) / (2·den)`
/// truncates toward zero, which lands on the half-away-from-zero result.
pub(crate) fn round_half_away(num: i128, den: i128) -> i64 {
    debug_assert!(den > 0, "denominator must be positive");
    let half = if num >= 0 { den } else { -den };
    ((num * 2 + half) / (den * 2)) as i64
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: the rounding discrepancy of a split is a signed
///   quantity (negative means the table underpays the check)
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, plus TypeScript bindings for the UI
///
/// Every monetary value in the engine flows through this type: the
/// subtotal and tax the user types, the tip either side of the
/// percentage/amount pair derives, and every per-person share.
///
/// Which currency the cents belong to is the presentation layer's
/// business; the engine only does cent arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::Money;
    ///
    /// let subtotal = Money::from_cents(1099); // $10.99
    /// assert_eq!(subtotal.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::Money;
    ///
    /// let check = Money::from_major_minor(10, 1); // $10.01
    /// assert_eq!(check.cents(), 1001);
    ///
    /// let shortfall = Money::from_major_minor(-5, 50); // -$5.50
    /// assert_eq!(shortfall.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    ///
    /// The warning banner shows the size of a shortfall without its sign:
    /// "underpays the check by $0.01".
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Applies a percentage to this amount, rounded to the nearest cent.
    ///
    /// This is the `tip = rate × base` half of the tip synchronization
    /// rules: whenever the subtotal, tax, tip-on-tax policy, or percentage
    /// changes, the tip amount is re-derived through this function.
    ///
    /// ## Implementation
    /// Integer math on an `i128` intermediate: `round(cents × bps / 10000)`
    /// with the engine-wide half-away-from-zero rounding.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::{Money, Rate};
    ///
    /// let base = Money::from_cents(1000);          // $10.00
    /// let rate = Rate::from_bps(1825);             // 18.25%
    ///
    /// // $10.00 × 18.25% = $1.825 → rounds to $1.83
    /// assert_eq!(base.tip_at(rate).cents(), 183);
    /// ```
    pub fn tip_at(&self, rate: Rate) -> Money {
        Money(round_half_away(
            self.0 as i128 * rate.bps() as i128,
            10_000,
        ))
    }

    /// One person's share of this amount, rounded to the nearest cent.
    ///
    /// Shares are rounded independently per component (subtotal, tax,
    /// tip), so `share × count` may differ from the original amount by a
    /// cent or two. The engine never redistributes that difference; it
    /// surfaces it as `SplitSummary::rounding_error`.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::{Money, SplitCount};
    ///
    /// let subtotal = Money::from_cents(1001);      // $10.01
    /// let three = SplitCount::from_count(3);
    ///
    /// // $10.01 / 3 = $3.336̄ → rounds to $3.34
    /// assert_eq!(subtotal.split_between(three).cents(), 334);
    /// ```
    pub fn split_between(&self, count: SplitCount) -> Money {
        Money(round_half_away(self.0 as i128, count.count() as i128))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and test output. Actual currency display,
/// including the locale's symbol and separators, belongs to the
/// presentation layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by an integer count, used to total up what a split
/// collectively pays (`per-person total × people`).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let paid: Money = a * 3;
        assert_eq!(paid.cents(), 3000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let shortfall = Money::from_cents(-1);
        assert!(shortfall.is_negative());
        assert_eq!(shortfall.abs().cents(), 1);
    }

    #[test]
    fn test_tip_at_basic() {
        // $10.00 at 20% = $2.00, the app's opening state
        let base = Money::from_cents(1000);
        let tip = base.tip_at(Rate::from_bps(2000));
        assert_eq!(tip.cents(), 200);
    }

    #[test]
    fn test_tip_at_rounds_to_cents() {
        // $10.01 at 15% = $1.5015 → $1.50
        let base = Money::from_cents(1001);
        assert_eq!(base.tip_at(Rate::from_bps(1500)).cents(), 150);

        // $10.99 at 18% = $1.9782 → $1.98
        let base = Money::from_cents(1099);
        assert_eq!(base.tip_at(Rate::from_bps(1800)).cents(), 198);
    }

    #[test]
    fn test_tip_at_half_rounds_away_from_zero() {
        // $0.25 at 10% = $0.025 → $0.03, not $0.02
        let base = Money::from_cents(25);
        assert_eq!(base.tip_at(Rate::from_bps(1000)).cents(), 3);

        // The same half-cent on a negative amount rounds away from zero too
        let base = Money::from_cents(-25);
        assert_eq!(base.tip_at(Rate::from_bps(1000)).cents(), -3);
    }

    #[test]
    fn test_tip_at_zero_rate() {
        let base = Money::from_cents(12345);
        assert_eq!(base.tip_at(Rate::zero()).cents(), 0);
    }

    #[test]
    fn test_split_between() {
        let three = SplitCount::from_count(3);

        // $10.01 / 3 = $3.336̄ → $3.34
        assert_eq!(Money::from_cents(1001).split_between(three).cents(), 334);
        // $10.00 / 3 = $3.3̄ → $3.33
        assert_eq!(Money::from_cents(1000).split_between(three).cents(), 333);
        // $10.00 / 4 = $2.50 exactly
        let four = SplitCount::from_count(4);
        assert_eq!(Money::from_cents(1000).split_between(four).cents(), 250);
    }

    #[test]
    fn test_split_between_half_rounds_away_from_zero() {
        let two = SplitCount::from_count(2);

        // $1.01 / 2 = $0.505 → $0.51
        assert_eq!(Money::from_cents(101).split_between(two).cents(), 51);
        // -$1.01 / 2 = -$0.505 → -$0.51
        assert_eq!(Money::from_cents(-101).split_between(two).cents(), -51);
    }

    #[test]
    fn test_split_between_single_share_is_identity() {
        let one = SplitCount::from_count(1);
        for cents in [0, 1, 99, 1000, 1001, 123_456] {
            assert_eq!(Money::from_cents(cents).split_between(one).cents(), cents);
        }
    }

    /// Critical test: splitting $10.00 three ways collects $9.99.
    /// The lost cent is intentional; the engine reports it through the
    /// split summary instead of silently absorbing it.
    #[test]
    fn test_split_precision_loss_documented() {
        let ten_dollars = Money::from_cents(1000);
        let share = ten_dollars.split_between(SplitCount::from_count(3));
        let collected: Money = share * 3;

        assert_eq!(share.cents(), 333);
        assert_eq!(collected.cents(), 999);
        assert_eq!((ten_dollars - collected).cents(), 1);
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(5, 2), 3); // 2.5 → 3
        assert_eq!(round_half_away(-5, 2), -3); // -2.5 → -3
        assert_eq!(round_half_away(4, 2), 2);
        assert_eq!(round_half_away(1001, 3), 334); // 333.67 → 334
        assert_eq!(round_half_away(1000, 3), 333); // 333.33 → 333
        assert_eq!(round_half_away(0, 7), 0);
    }
}
