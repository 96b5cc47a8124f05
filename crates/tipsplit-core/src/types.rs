//! # Domain Types
//!
//! The two quantities on a check that are not money: the tip percentage
//! and the number of people splitting.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │       Rate          │          │     SplitCount      │              │
//! │  │  ─────────────────  │          │  ─────────────────  │              │
//! │  │  bps (u32)          │          │  people (u32)       │              │
//! │  │  2000 = 20% tip     │          │  floored at 1       │              │
//! │  │  from_ratio: the    │          │  1 = "just myself"  │              │
//! │  │  tip ÷ base half of │          │  (no splitting)     │              │
//! │  │  the sync rules     │          │                     │              │
//! │  └─────────────────────┘          └─────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{round_half_away, Money};

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000. 2000 bps = 20%, the default tip. The
/// percent keypad never produces anything finer than a basis point, so
/// integer bps hold every value the UI can enter, with exact equality for
/// the no-op guards in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::Rate;
    ///
    /// assert_eq!(Rate::from_percentage(18.25).bps(), 1825);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        Rate((pct * 100.0).round() as u32)
    }

    /// Derives the rate one amount represents of another, rounded to
    /// whole percentage points.
    ///
    /// This is the `rate = tip ÷ base` half of the tip synchronization
    /// rules: when the user edits the tip amount directly, the percentage
    /// field is re-derived through this function. Rounding to whole
    /// percents matches the granularity the percent field displays, so
    /// the derived value round-trips through it cleanly.
    ///
    /// ## Zero or negative base
    /// A zero `whole` is a defined case, not an error: the result is a
    /// zero rate, keeping downstream math finite where floating-point
    /// division would have produced NaN. A negative `whole` or a negative
    /// ratio clamps to zero the same way; neither is reachable from a
    /// decimal keypad.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::{Money, Rate};
    ///
    /// let base = Money::from_cents(1000);
    ///
    /// // $1.99 of $10.00 is 19.9% → rounds to 20%
    /// let rate = Rate::from_ratio(Money::from_cents(199), base);
    /// assert_eq!(rate.bps(), 2000);
    ///
    /// // An empty check: defined as 0%, never NaN
    /// let rate = Rate::from_ratio(Money::from_cents(500), Money::zero());
    /// assert_eq!(rate.bps(), 0);
    /// ```
    pub fn from_ratio(part: Money, whole: Money) -> Self {
        if whole.cents() <= 0 {
            return Rate::zero();
        }
        let percents = round_half_away(part.cents() as i128 * 100, whole.cents() as i128);
        if percents <= 0 {
            return Rate::zero();
        }
        let bps = (percents as i128 * 100).min(u32::MAX as i128);
        Rate(bps as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Split Count
// =============================================================================

/// Number of people dividing the check.
///
/// The constructor floors at one person, so "n ≥ 1" is a property of the
/// type rather than something each division site re-checks. One is the
/// degenerate "just myself" case: shares equal the full amounts and no
/// rounding discrepancy is possible.
///
/// Serialize-only: values are rebuilt through [`SplitCount::from_count`]
/// so the floor always holds; deserializing raw numbers would sidestep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SplitCount(u32);

impl SplitCount {
    /// Creates a split count, flooring at one person.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::SplitCount;
    ///
    /// assert_eq!(SplitCount::from_count(4).count(), 4);
    /// assert_eq!(SplitCount::from_count(0).count(), 1); // floored
    /// ```
    #[inline]
    pub const fn from_count(count: u32) -> Self {
        if count == 0 {
            SplitCount(1)
        } else {
            SplitCount(count)
        }
    }

    /// Returns the number of people.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0
    }

    /// Checks for the "just myself" case (no splitting).
    #[inline]
    pub const fn is_single(&self) -> bool {
        self.0 == 1
    }
}

/// Default is paying alone.
impl Default for SplitCount {
    fn default() -> Self {
        SplitCount(1)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(2000);
        assert_eq!(rate.bps(), 2000);
        assert!((rate.percentage() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_rate_from_percentage() {
        assert_eq!(Rate::from_percentage(20.0).bps(), 2000);
        assert_eq!(Rate::from_percentage(18.25).bps(), 1825);
        assert_eq!(Rate::from_percentage(0.0).bps(), 0);
    }

    #[test]
    fn test_from_ratio_exact() {
        // $2.00 of $10.00 = 20%
        let rate = Rate::from_ratio(Money::from_cents(200), Money::from_cents(1000));
        assert_eq!(rate.bps(), 2000);
    }

    #[test]
    fn test_from_ratio_lands_on_whole_percents() {
        let base = Money::from_cents(1000);

        // $1.55 of $10.00 = 15.5% → 16%
        assert_eq!(Rate::from_ratio(Money::from_cents(155), base).bps(), 1600);
        // $1.99 of $10.00 = 19.9% → 20%
        assert_eq!(Rate::from_ratio(Money::from_cents(199), base).bps(), 2000);
        // $1.54 of $10.00 = 15.4% → 15%
        assert_eq!(Rate::from_ratio(Money::from_cents(154), base).bps(), 1500);
    }

    #[test]
    fn test_from_ratio_half_rounds_away_from_zero() {
        // 14.5% → 15%, matching the keypad's own rounding
        let rate = Rate::from_ratio(Money::from_cents(145), Money::from_cents(1000));
        assert_eq!(rate.bps(), 1500);
    }

    #[test]
    fn test_from_ratio_zero_base_is_zero_rate() {
        let rate = Rate::from_ratio(Money::from_cents(500), Money::zero());
        assert!(rate.is_zero());

        let rate = Rate::from_ratio(Money::zero(), Money::zero());
        assert!(rate.is_zero());
    }

    #[test]
    fn test_from_ratio_clamps_negative_to_zero() {
        let rate = Rate::from_ratio(Money::from_cents(-500), Money::from_cents(1000));
        assert!(rate.is_zero());

        let rate = Rate::from_ratio(Money::from_cents(500), Money::from_cents(-1000));
        assert!(rate.is_zero());
    }

    #[test]
    fn test_from_ratio_can_exceed_one_hundred_percent() {
        // A $5.00 tip on a $2.00 check is a 250% rate; the engine keeps it
        let rate = Rate::from_ratio(Money::from_cents(500), Money::from_cents(200));
        assert_eq!(rate.bps(), 25_000);
    }

    #[test]
    fn test_split_count_floor() {
        assert_eq!(SplitCount::from_count(0).count(), 1);
        assert_eq!(SplitCount::from_count(1).count(), 1);
        assert_eq!(SplitCount::from_count(100).count(), 100);
    }

    #[test]
    fn test_split_count_single() {
        assert!(SplitCount::from_count(1).is_single());
        assert!(!SplitCount::from_count(2).is_single());
        assert!(SplitCount::default().is_single());
    }
}
