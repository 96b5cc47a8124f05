//! # Ledger
//!
//! The raw check inputs and the rules that keep the tip fields in sync.
//!
//! ## Update Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cross-Field Synchronization                          │
//! │                                                                         │
//! │  Edit               Recomputation                  Write Discipline     │
//! │  ───────────        ─────────────────────────      ─────────────────    │
//! │                                                                         │
//! │  subtotal ──────┐                                                       │
//! │                 ├──► tip = base.tip_at(rate)       unconditional        │
//! │  tax ───────────┘                                                       │
//! │                                                                         │
//! │  tip-on-tax ───────► tip = base.tip_at(rate)       only on change       │
//! │                                                                         │
//! │  tip rate ─────────► tip = base.tip_at(rate)       only on change       │
//! │                                                                         │
//! │  tip amount ───────► rate = from_ratio(tip, base)  only on change       │
//! │                                                                         │
//! │  split count ──────► (nothing; shares are derived on demand)            │
//! │                                                                         │
//! │  Each edit recomputes exactly its counterpart and stops. Updates       │
//! │  never cascade, so ordering is deterministic and testable.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tip percentage and tip amount are two views of one quantity.
//! Editing either one re-derives the other; the "only on change" guard
//! keeps a pair of mutually updating fields from ping-ponging, and lets a
//! repeated edit report that nothing happened so downstream listeners stay
//! quiet.
//!
//! The ledger serializes for state transfer to the UI but is never
//! deserialized: state is rebuilt through the setters, which is what keeps
//! the tip pair synchronized.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::split::SplitSummary;
use crate::types::{Rate, SplitCount};

// =============================================================================
// Ledger
// =============================================================================

/// The user-editable state of one check: what was spent, how it is
/// tipped, and how many people are paying.
///
/// ## Invariants
/// - After `set_subtotal`, `set_tax`, `set_tip_on_tax`, or `set_tip_rate`,
///   the tip amount equals `tip_base().tip_at(tip_rate())`.
/// - After `set_tip_amount`, the amount is authoritative: it holds exactly
///   what the caller supplied and `tip_rate()` holds the re-derived
///   percentage.
/// - The split count never drops below one person.
///
/// One instance lives for the UI session and is mutated only through the
/// setters; wrap it in [`LedgerState`](crate::state::LedgerState) if it
/// ever has to leave the UI thread.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Pre-tax amount on the check.
    subtotal: Money,

    /// Tax amount, in the same currency unit as the subtotal.
    tax: Money,

    /// Policy flag: when true, the tip percentage applies to
    /// subtotal + tax instead of the subtotal alone.
    tip_on_tax: bool,

    /// Tip percentage; the anchor whenever the bill itself changes.
    tip_rate: Rate,

    /// Tip amount; kept consistent with `tip_rate` applied to the base.
    tip: Money,

    /// Number of people dividing the check.
    split_count: SplitCount,
}

/// The check the app opens with: $10.00 subtotal, $2.00 tax, a 20% tip of
/// $2.00 on the subtotal alone, nobody else at the table.
impl Default for Ledger {
    fn default() -> Self {
        Ledger {
            subtotal: Money::from_cents(1_000),
            tax: Money::from_cents(200),
            tip_on_tax: false,
            tip_rate: Rate::from_bps(2_000),
            tip: Money::from_cents(200),
            split_count: SplitCount::from_count(1),
        }
    }
}

impl Ledger {
    /// Creates a ledger with the default check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-tax amount on the check.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Tax amount.
    #[inline]
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Whether the tip percentage applies to subtotal + tax.
    #[inline]
    pub fn tip_on_tax(&self) -> bool {
        self.tip_on_tax
    }

    /// Tip percentage.
    #[inline]
    pub fn tip_rate(&self) -> Rate {
        self.tip_rate
    }

    /// Tip amount.
    #[inline]
    pub fn tip(&self) -> Money {
        self.tip
    }

    /// Number of people dividing the check.
    #[inline]
    pub fn split_count(&self) -> SplitCount {
        self.split_count
    }

    /// The amount the tip percentage applies to: the subtotal, or
    /// subtotal plus tax when tipping on tax.
    pub fn tip_base(&self) -> Money {
        if self.tip_on_tax {
            self.subtotal + self.tax
        } else {
            self.subtotal
        }
    }

    /// The grand total: subtotal + tax + tip.
    pub fn total(&self) -> Money {
        self.subtotal + self.tax + self.tip
    }

    /// The tax as a percentage of the subtotal, rounded to whole
    /// percentage points.
    ///
    /// Shown next to the tax field so the user can sanity-check what they
    /// typed against the tax rate they expect. A zero subtotal yields a
    /// zero rate (same policy as [`Rate::from_ratio`]).
    pub fn implied_tax_rate(&self) -> Rate {
        Rate::from_ratio(self.tax, self.subtotal)
    }

    /// Derives a fresh [`SplitSummary`] from the current inputs.
    ///
    /// Summaries are cheap plain values. Derive one after every edit and
    /// render from it; a summary held across a mutation is stale.
    pub fn summary(&self) -> SplitSummary {
        SplitSummary::from(self)
    }

    /// Sets the check subtotal and re-derives the tip amount.
    ///
    /// The percentage is the anchor when the bill changes: a new subtotal
    /// moves the tip amount and leaves the percentage alone.
    ///
    /// ## Returns
    /// `true` when any stored field changed; callers repaint on `true`.
    pub fn set_subtotal(&mut self, value: Money) -> bool {
        let before = (self.subtotal, self.tip);
        self.subtotal = value;
        self.tip = self.tip_base().tip_at(self.tip_rate);
        (self.subtotal, self.tip) != before
    }

    /// Sets the tax amount and re-derives the tip amount.
    ///
    /// With tip-on-tax off this recomputes the same tip as before (the
    /// base does not include tax), which is exactly the no-op it looks
    /// like; with tip-on-tax on, the tip tracks the larger base.
    ///
    /// ## Returns
    /// `true` when any stored field changed.
    pub fn set_tax(&mut self, value: Money) -> bool {
        let before = (self.tax, self.tip);
        self.tax = value;
        self.tip = self.tip_base().tip_at(self.tip_rate);
        (self.tax, self.tip) != before
    }

    /// Sets the tip-on-tax policy and re-derives the tip amount.
    ///
    /// ## Behavior
    /// The tip amount is rewritten only when the recomputed value differs
    /// from the stored one, so flipping the flag on a tax-free check
    /// reports the flag change without touching the amount.
    ///
    /// ## Returns
    /// `true` when any stored field changed.
    pub fn set_tip_on_tax(&mut self, flag: bool) -> bool {
        let flag_changed = self.tip_on_tax != flag;
        self.tip_on_tax = flag;
        let tip = self.tip_base().tip_at(self.tip_rate);
        if tip == self.tip {
            return flag_changed;
        }
        self.tip = tip;
        true
    }

    /// Sets the tip percentage and re-derives the tip amount.
    ///
    /// ## Behavior
    /// The recomputation runs even when the percentage itself is
    /// unchanged: re-picking the current preset after a manual tip edit
    /// snaps the amount back to `rate × base`. The write is skipped when
    /// the recomputed amount already matches.
    ///
    /// ## Returns
    /// `true` when any stored field changed.
    pub fn set_tip_rate(&mut self, rate: Rate) -> bool {
        let rate_changed = self.tip_rate != rate;
        self.tip_rate = rate;
        let tip = self.tip_base().tip_at(rate);
        if tip == self.tip {
            return rate_changed;
        }
        self.tip = tip;
        true
    }

    /// Sets the tip amount and re-derives the tip percentage.
    ///
    /// ## Behavior
    /// The stored tip is exactly what the caller supplied; only the
    /// percentage is recomputed, rounded to whole percentage points the
    /// way the percent field displays them. A zero tip base yields a zero
    /// percentage rather than an error (see [`Rate::from_ratio`]). The
    /// write to the percentage is skipped when it already matches.
    ///
    /// ## Returns
    /// `true` when any stored field changed.
    pub fn set_tip_amount(&mut self, value: Money) -> bool {
        let amount_changed = self.tip != value;
        self.tip = value;
        let rate = Rate::from_ratio(self.tip, self.tip_base());
        if rate == self.tip_rate {
            return amount_changed;
        }
        self.tip_rate = rate;
        true
    }

    /// Sets how many people divide the check.
    ///
    /// Split count never feeds back into tip derivation; per-person
    /// shares are computed on demand by [`SplitSummary`].
    ///
    /// ## Returns
    /// `true` when the count changed.
    pub fn set_split_count(&mut self, count: SplitCount) -> bool {
        let changed = self.split_count != count;
        self.split_count = count;
        changed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
