//! # tipsplit-core: Pure Check-Splitting Logic
//!
//! This crate is the **heart** of the tip calculator. It contains all the
//! check math as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tip Splitter Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       UI Shell (any frontend)                   │   │
//! │  │    Amount fields ──► Preset row ──► Party picker ──► Results   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ LedgerView per edit                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    LedgerState Operations                       │   │
//! │  │    set_subtotal, set_tip_rate, set_split_count, view, etc.     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tipsplit-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │  ledger   │  │   split   │  │   │
//! │  │   │   Money   │  │   Rate    │  │  Ledger   │  │  Split-   │  │   │
//! │  │   │  rounding │  │SplitCount │  │ tip sync  │  │  Summary  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Rate and SplitCount newtypes
//! - [`ledger`] - Check state and the tip synchronization rules
//! - [`split`] - Per-person shares and the rounding error report
//! - [`focus`] - Input field traversal order
//! - [`state`] - Thread-safe wrapper and UI-facing operations
//! - [`error`] - Domain error types
//! - [`validation`] - Input range checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Honest Rounding**: Per-person drift is reported, never hidden
//!
//! ## Example Usage
//!
//! ```rust
//! use tipsplit_core::{Ledger, Money, Rate, SplitCount};
//!
//! // The default check: $10.00 + $2.00 tax, 20% tip on the subtotal
//! let mut ledger = Ledger::new();
//! assert_eq!(ledger.tip(), Money::from_cents(200));
//!
//! // Four people at the table, tipping 18% instead
//! ledger.set_tip_rate(Rate::from_bps(1800));
//! ledger.set_split_count(SplitCount::from_count(4));
//!
//! let summary = ledger.summary();
//! assert_eq!(summary.total(), Money::from_cents(1380));           // $13.80
//! assert_eq!(summary.per_person_total(), Money::from_cents(345)); // $3.45
//! assert!(summary.is_exact());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod focus;
pub mod ledger;
pub mod money;
pub mod split;
pub mod state;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tipsplit_core::Ledger` instead of
// `use tipsplit_core::ledger::Ledger`

pub use error::ValidationError;
pub use focus::FocusField;
pub use ledger::Ledger;
pub use money::Money;
pub use split::SplitSummary;
pub use state::{LedgerState, LedgerView};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tip percentages offered as one-tap presets, in ascending order.
///
/// ## Why 0% is included
/// "No tip" is a deliberate choice the user should be able to make in one
/// tap, same as the customary rates. Preset order is the display order.
pub const TIP_RATE_PRESETS: [types::Rate; 5] = [
    types::Rate::from_bps(0),
    types::Rate::from_bps(1_500),
    types::Rate::from_bps(1_800),
    types::Rate::from_bps(2_000),
    types::Rate::from_bps(2_500),
];

/// Maximum party size offered by the split picker
///
/// ## Business Reason
/// Bounds the picker wheel. A table of more than 100 is a banquet with an
/// events contract, not a split check.
pub const MAX_SPLIT_COUNT: u32 = 100;

/// Maximum tip percentage accepted from the percent field, in basis points
///
/// ## Business Reason
/// Caps typed percentages at 100%. Rates derived from a typed tip amount
/// may legitimately exceed this (generous tip on a tiny check).
pub const MAX_TIP_RATE_BPS: u32 = 10_000;
