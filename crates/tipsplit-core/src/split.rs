//! # Split Summary
//!
//! Per-person shares derived from a [`Ledger`].
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Ledger ──► SplitSummary                         │
//! │                                                                     │
//! │   subtotal ─── ÷ n ───► perPersonSubtotal ──┐                       │
//! │   tax ──────── ÷ n ───► perPersonTax ───────┼──► perPersonTotal     │
//! │   tip ──────── ÷ n ───► perPersonTip ───────┘          │            │
//! │                                                        │            │
//! │   total ◄────────────── × n ───────────────────────────┘            │
//! │     └──► roundingError = reassembled − actual                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each share rounds to the nearest cent independently, so the reassembled
//! total can drift from the actual check by a few cents. That drift is not
//! hidden or redistributed; it is reported as `roundingError` so the UI
//! can show "everyone pays $4.67 (overpays by $0.01)" instead of quietly
//! shorting the house or the table.
//!
//! A summary is a plain value snapshot. It does not observe later ledger
//! edits; derive a new one after every mutation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ledger::Ledger;
use crate::money::Money;

// =============================================================================
// SplitSummary
// =============================================================================

/// Everything the results panel renders: the check totals, each person's
/// share of them, and the cent drift introduced by rounding the shares.
///
/// ## Example
/// ```
/// use tipsplit_core::{Ledger, Money, SplitCount, SplitSummary};
///
/// let mut ledger = Ledger::new();
/// ledger.set_subtotal(Money::from_cents(10_01));
/// ledger.set_tax(Money::zero());
/// ledger.set_tip_amount(Money::zero());
/// ledger.set_split_count(SplitCount::from_count(3));
///
/// // $10.01 across three people: $3.34 each, a cent over the check
/// let summary = SplitSummary::from(&ledger);
/// assert_eq!(summary.per_person_total(), Money::from_cents(334));
/// assert_eq!(summary.rounding_error(), Money::from_cents(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SplitSummary {
    /// Check subtotal, in cents.
    subtotal: i64,

    /// Check tax, in cents.
    tax: i64,

    /// Check tip, in cents.
    tip: i64,

    /// The amount the tip percentage applied to, in cents.
    tip_base: i64,

    /// Check grand total, in cents.
    total: i64,

    /// One person's share of the subtotal, in cents.
    per_person_subtotal: i64,

    /// One person's share of the tax, in cents.
    per_person_tax: i64,

    /// One person's share of the tip, in cents.
    per_person_tip: i64,

    /// Sum of the three per-person shares, in cents.
    per_person_total: i64,

    /// `perPersonTotal × splitCount − total`, in cents. Positive means
    /// the table collectively overpays, negative underpays.
    rounding_error: i64,

    /// How many people the shares were computed for.
    split_count: u32,
}

impl From<&Ledger> for SplitSummary {
    fn from(ledger: &Ledger) -> Self {
        let count = ledger.split_count();
        let total = ledger.total();

        let per_person_subtotal = ledger.subtotal().split_between(count);
        let per_person_tax = ledger.tax().split_between(count);
        let per_person_tip = ledger.tip().split_between(count);
        let per_person_total = per_person_subtotal + per_person_tax + per_person_tip;

        let reassembled = per_person_total * count.count() as i64;

        SplitSummary {
            subtotal: ledger.subtotal().cents(),
            tax: ledger.tax().cents(),
            tip: ledger.tip().cents(),
            tip_base: ledger.tip_base().cents(),
            total: total.cents(),
            per_person_subtotal: per_person_subtotal.cents(),
            per_person_tax: per_person_tax.cents(),
            per_person_tip: per_person_tip.cents(),
            per_person_total: per_person_total.cents(),
            rounding_error: (reassembled - total).cents(),
            split_count: count.count(),
        }
    }
}

impl SplitSummary {
    /// Check subtotal.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal)
    }

    /// Check tax.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax)
    }

    /// Check tip.
    #[inline]
    pub fn tip(&self) -> Money {
        Money::from_cents(self.tip)
    }

    /// The amount the tip percentage applied to.
    #[inline]
    pub fn tip_base(&self) -> Money {
        Money::from_cents(self.tip_base)
    }

    /// Check grand total.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total)
    }

    /// One person's share of the subtotal.
    #[inline]
    pub fn per_person_subtotal(&self) -> Money {
        Money::from_cents(self.per_person_subtotal)
    }

    /// One person's share of the tax.
    #[inline]
    pub fn per_person_tax(&self) -> Money {
        Money::from_cents(self.per_person_tax)
    }

    /// One person's share of the tip.
    #[inline]
    pub fn per_person_tip(&self) -> Money {
        Money::from_cents(self.per_person_tip)
    }

    /// What each person actually pays.
    #[inline]
    pub fn per_person_total(&self) -> Money {
        Money::from_cents(self.per_person_total)
    }

    /// Cent drift between the reassembled shares and the actual total.
    #[inline]
    pub fn rounding_error(&self) -> Money {
        Money::from_cents(self.rounding_error)
    }

    /// How many people the shares were computed for.
    #[inline]
    pub fn split_count(&self) -> u32 {
        self.split_count
    }

    /// True when the reassembled shares collect more than the check.
    #[inline]
    pub fn overpays(&self) -> bool {
        self.rounding_error > 0
    }

    /// True when the reassembled shares collect less than the check.
    #[inline]
    pub fn underpays(&self) -> bool {
        self.rounding_error < 0
    }

    /// True when the shares reassemble to the check exactly.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.rounding_error == 0
    }

    /// True when more than one person is paying.
    #[inline]
    pub fn is_split(&self) -> bool {
        self.split_count > 1
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rate, SplitCount};

    #[test]
    fn test_single_person_summary_is_the_check() {
        let summary = Ledger::default().summary();

        assert_eq!(summary.split_count(), 1);
        assert_eq!(summary.tip_base().cents(), 1000); // tip-on-tax off
        assert_eq!(summary.per_person_subtotal().cents(), 1000);
        assert_eq!(summary.per_person_tax().cents(), 200);
        assert_eq!(summary.per_person_tip().cents(), 200);
        assert_eq!(summary.per_person_total(), summary.total());
        assert!(summary.is_exact());
        assert!(!summary.is_split());
    }

    #[test]
    fn test_even_split_has_no_error() {
        let mut ledger = Ledger::new();
        ledger.set_subtotal(Money::from_cents(900));
        ledger.set_tax(Money::from_cents(150));
        ledger.set_tip_amount(Money::from_cents(150));
        ledger.set_split_count(SplitCount::from_count(3));

        let summary = ledger.summary();
        assert_eq!(summary.per_person_subtotal().cents(), 300);
        assert_eq!(summary.per_person_tax().cents(), 50);
        assert_eq!(summary.per_person_tip().cents(), 50);
        assert_eq!(summary.per_person_total().cents(), 400);
        assert!(summary.is_exact());
        assert!(summary.is_split());
    }

    #[test]
    fn test_uneven_split_overpays_and_says_so() {
        let mut ledger = Ledger::new();
        ledger.set_subtotal(Money::from_cents(1001));
        ledger.set_tax(Money::zero());
        ledger.set_tip_amount(Money::zero());
        ledger.set_split_count(SplitCount::from_count(3));

        let summary = ledger.summary();
        assert_eq!(summary.per_person_total().cents(), 334);
        assert_eq!(summary.rounding_error().cents(), 1);
        assert!(summary.overpays());
        assert!(!summary.underpays());
    }

    #[test]
    fn test_uneven_split_can_underpay() {
        let mut ledger = Ledger::new();
        ledger.set_subtotal(Money::from_cents(400));
        ledger.set_tax(Money::zero());
        ledger.set_tip_amount(Money::zero());
        ledger.set_split_count(SplitCount::from_count(3));

        // $4.00 / 3 = $1.33 each; the table comes up a cent short
        let summary = ledger.summary();
        assert_eq!(summary.per_person_total().cents(), 133);
        assert_eq!(summary.rounding_error().cents(), -1);
        assert!(summary.underpays());
    }

    #[test]
    fn test_component_drifts_can_cancel() {
        let mut ledger = Ledger::new();
        ledger.set_tax(Money::zero());
        ledger.set_split_count(SplitCount::from_count(3));

        // $10.00 at 20%, three ways: the subtotal share loses a cent
        // (333 × 3 = 999) and the tip share gains one (67 × 3 = 201),
        // so the reassembled total lands exactly on $12.00
        let summary = ledger.summary();
        assert_eq!(summary.tip().cents(), 200);
        assert_eq!(summary.total().cents(), 1200);
        assert_eq!(summary.per_person_subtotal().cents(), 333);
        assert_eq!(summary.per_person_tip().cents(), 67);
        assert_eq!(summary.per_person_total().cents(), 400);
        assert!(summary.is_exact());
    }

    #[test]
    fn test_default_check_three_ways() {
        let mut ledger = Ledger::new();
        ledger.set_split_count(SplitCount::from_count(3));

        // $10.00 + $2.00 + $2.00 across three: each share rounds up
        let summary = ledger.summary();
        assert_eq!(summary.per_person_subtotal().cents(), 333);
        assert_eq!(summary.per_person_tax().cents(), 67);
        assert_eq!(summary.per_person_tip().cents(), 67);
        assert_eq!(summary.per_person_total().cents(), 467);
        assert_eq!(summary.rounding_error().cents(), 1);
    }

    #[test]
    fn test_shares_round_per_field_not_on_the_sum() {
        let mut ledger = Ledger::new();
        ledger.set_subtotal(Money::from_cents(100));
        ledger.set_tax(Money::from_cents(100));
        ledger.set_tip_amount(Money::from_cents(100));
        ledger.set_split_count(SplitCount::from_count(8));

        // 100/8 = 12.5 → 13 three times over; the sum of rounded shares
        // (39) is not the rounded sum (38)
        let summary = ledger.summary();
        assert_eq!(summary.per_person_subtotal().cents(), 13);
        assert_eq!(summary.per_person_total().cents(), 39);
        assert_eq!(summary.rounding_error().cents(), 12); // 312 − 300
    }

    #[test]
    fn test_summary_is_a_snapshot() {
        let mut ledger = Ledger::new();
        let before = ledger.summary();

        ledger.set_subtotal(Money::from_cents(5000));
        assert_eq!(before.subtotal().cents(), 1000); // unchanged value

        let after = ledger.summary();
        assert_eq!(after.subtotal().cents(), 5000);
        assert_ne!(before, after);
    }

    #[test]
    fn test_per_person_total_is_sum_of_shares() {
        let amounts = [0_i64, 1, 99, 1000, 1001, 2499, 9999];
        let counts = [1_u32, 2, 3, 7, 100];

        for &cents in &amounts {
            for &count in &counts {
                let mut ledger = Ledger::new();
                ledger.set_subtotal(Money::from_cents(cents));
                ledger.set_tax(Money::from_cents(cents / 10));
                ledger.set_tip_rate(Rate::from_bps(1800));
                ledger.set_split_count(SplitCount::from_count(count));

                let summary = ledger.summary();
                assert_eq!(
                    summary.per_person_total(),
                    summary.per_person_subtotal()
                        + summary.per_person_tax()
                        + summary.per_person_tip(),
                );
            }
        }
    }

    #[test]
    fn test_rounding_error_stays_within_half_cent_per_field() {
        let amounts = [0_i64, 1, 2, 99, 100, 999, 1000, 1001, 2499, 9999];
        let counts = [1_u32, 2, 3, 4, 5, 7, 10, 99, 100];

        for &subtotal in &amounts {
            for &tip in &amounts {
                for &count in &counts {
                    let mut ledger = Ledger::new();
                    ledger.set_subtotal(Money::from_cents(subtotal));
                    ledger.set_tax(Money::from_cents(subtotal / 10));
                    ledger.set_tip_amount(Money::from_cents(tip));
                    ledger.set_split_count(SplitCount::from_count(count));

                    let summary = ledger.summary();
                    let error = summary.rounding_error().cents().unsigned_abs();

                    // Each of the three shares rounds by at most half a
                    // cent per person, so the reassembled total drifts by
                    // at most 1.5 cents per person.
                    assert!(
                        2 * error <= 3 * count as u64,
                        "error {error} cents for {count} people on {subtotal}/{tip}"
                    );

                    // A single payer never drifts at all
                    if count == 1 {
                        assert!(summary.is_exact());
                    }
                }
            }
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut ledger = Ledger::new();
        ledger.set_split_count(SplitCount::from_count(2));

        let json = serde_json::to_value(ledger.summary()).unwrap();
        assert_eq!(json["tipBase"], 1000);
        assert_eq!(json["perPersonSubtotal"], 500);
        assert_eq!(json["perPersonTax"], 100);
        assert_eq!(json["perPersonTip"], 100);
        assert_eq!(json["perPersonTotal"], 700);
        assert_eq!(json["roundingError"], 0);
        assert_eq!(json["splitCount"], 2);
    }
}
