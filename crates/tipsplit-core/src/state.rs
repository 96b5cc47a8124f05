//! # Ledger State
//!
//! Shared ownership wrapper around the [`Ledger`] and the operations a UI
//! shell invokes against it.
//!
//! ## Thread Safety
//! The ledger is wrapped in `Arc<Mutex<T>>` because:
//! 1. UI callbacks and background work may run on different threads
//! 2. Only one edit may rewrite the tip pair at a time
//! 3. Every operation is a quick field update, so a Mutex is enough
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger State Operations                              │
//! │                                                                         │
//! │  UI Action                Operation                Ledger Change        │
//! │  ─────────                ─────────                ─────────────        │
//! │                                                                         │
//! │  Edit subtotal field ───► set_subtotal() ───────► subtotal, tip         │
//! │                                                                         │
//! │  Edit tax field ────────► set_tax() ────────────► tax, tip              │
//! │                                                                         │
//! │  Toggle tip-on-tax ─────► set_tip_on_tax() ─────► flag, tip             │
//! │                                                                         │
//! │  Pick preset / slider ──► set_tip_rate() ───────► rate, tip             │
//! │                                                                         │
//! │  Edit tip field ────────► set_tip_amount() ─────► tip, rate             │
//! │                                                                         │
//! │  Pick party size ───────► set_split_count() ────► count                 │
//! │                                                                         │
//! │  Render ────────────────► view() ───────────────► (read only)           │
//! │                                                                         │
//! │  NOTE: Every operation returns a fresh LedgerView so the caller         │
//! │        repaints from the state it just produced, never from a           │
//! │        cached snapshot.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::ledger::Ledger;
use crate::money::Money;
use crate::split::SplitSummary;
use crate::types::{Rate, SplitCount};

// =============================================================================
// LedgerView
// =============================================================================

/// Ledger response including the raw fields and the derived shares.
///
/// This is the one payload the UI needs per frame: the editable state (to
/// fill the input fields) and the summary (to fill the results panel).
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LedgerView {
    pub ledger: Ledger,
    pub summary: SplitSummary,
}

impl From<&Ledger> for LedgerView {
    fn from(ledger: &Ledger) -> Self {
        LedgerView {
            ledger: ledger.clone(),
            summary: SplitSummary::from(ledger),
        }
    }
}

// =============================================================================
// LedgerState
// =============================================================================

/// Shared ledger state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Ledger>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one thread rewrites the tip pair at a time
///
/// ## Why Not RwLock?
/// Ledger operations are tiny field updates and most of them write.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct LedgerState {
    ledger: Arc<Mutex<Ledger>>,
}

impl LedgerState {
    /// Creates state holding the default check.
    pub fn new() -> Self {
        LedgerState {
            ledger: Arc::new(Mutex::new(Ledger::new())),
        }
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = state.with_ledger(|ledger| ledger.total());
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Ledger) -> R,
    {
        let ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_ledger_mut(|ledger| ledger.set_tip_on_tax(true));
    /// ```
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Ledger) -> R,
    {
        let mut ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&mut ledger)
    }

    /// Gets the current ledger and its derived shares.
    pub fn view(&self) -> LedgerView {
        debug!("view operation");
        self.with_ledger(|ledger| LedgerView::from(ledger))
    }

    /// Sets the check subtotal.
    ///
    /// ## Returns
    /// Updated view with the re-derived tip and fresh shares
    pub fn set_subtotal(&self, value: Money) -> LedgerView {
        self.with_ledger_mut(|ledger| {
            let changed = ledger.set_subtotal(value);
            debug!(cents = %value.cents(), changed = %changed, "set_subtotal operation");
            LedgerView::from(&*ledger)
        })
    }

    /// Sets the tax amount.
    ///
    /// ## Returns
    /// Updated view
    pub fn set_tax(&self, value: Money) -> LedgerView {
        self.with_ledger_mut(|ledger| {
            let changed = ledger.set_tax(value);
            debug!(cents = %value.cents(), changed = %changed, "set_tax operation");
            LedgerView::from(&*ledger)
        })
    }

    /// Sets whether the tip percentage applies to subtotal + tax.
    ///
    /// ## Returns
    /// Updated view
    pub fn set_tip_on_tax(&self, flag: bool) -> LedgerView {
        self.with_ledger_mut(|ledger| {
            let changed = ledger.set_tip_on_tax(flag);
            debug!(flag = %flag, changed = %changed, "set_tip_on_tax operation");
            LedgerView::from(&*ledger)
        })
    }

    /// Sets the tip percentage.
    ///
    /// ## Returns
    /// Updated view
    pub fn set_tip_rate(&self, rate: Rate) -> LedgerView {
        self.with_ledger_mut(|ledger| {
            let changed = ledger.set_tip_rate(rate);
            debug!(bps = %rate.bps(), changed = %changed, "set_tip_rate operation");
            LedgerView::from(&*ledger)
        })
    }

    /// Sets the tip amount.
    ///
    /// ## Returns
    /// Updated view
    pub fn set_tip_amount(&self, value: Money) -> LedgerView {
        self.with_ledger_mut(|ledger| {
            let changed = ledger.set_tip_amount(value);
            debug!(cents = %value.cents(), changed = %changed, "set_tip_amount operation");
            LedgerView::from(&*ledger)
        })
    }

    /// Sets how many people divide the check.
    ///
    /// ## Returns
    /// Updated view
    pub fn set_split_count(&self, count: SplitCount) -> LedgerView {
        self.with_ledger_mut(|ledger| {
            let changed = ledger.set_split_count(count);
            debug!(count = %count.count(), changed = %changed, "set_split_count operation");
            LedgerView::from(&*ledger)
        })
    }

    /// Puts the default check back.
    ///
    /// ## When Used
    /// - User starts a new check
    ///
    /// ## Returns
    /// View of the default check
    pub fn reset(&self) -> LedgerView {
        debug!("reset operation");

        self.with_ledger_mut(|ledger| {
            *ledger = Ledger::default();
            LedgerView::from(&*ledger)
        })
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
