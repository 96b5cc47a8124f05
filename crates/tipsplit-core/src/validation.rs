//! # Validation Module
//!
//! Input validation for the check fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input fields (UI)                                            │
//! │  ├── Decimal keyboards, currency formatting                            │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Range checks before values reach the ledger                       │
//! │  └── One error message per rejected field                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Types                                                        │
//! │  ├── SplitCount floors at one person                                   │
//! │  └── Rate::from_ratio defines the zero-base case                       │
//! │                                                                         │
//! │  Defense in depth: the types stay total even when a caller skips       │
//! │  this module.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use tipsplit_core::validation::{validate_amount_cents, validate_split_count};
//!
//! // Validate a parsed subtotal before applying it
//! validate_amount_cents("subtotal", 1099).unwrap();
//!
//! // Validate a party size picked by the user
//! validate_split_count(4).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_SPLIT_COUNT, MAX_TIP_RATE_BPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a money amount in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (tax-free checks, no tip)
///
/// The same rule covers subtotal, tax, and tip; `field` names the one
/// being checked so the error reads back to the right input.
///
/// ## Example
/// ```rust
/// use tipsplit_core::validation::validate_amount_cents;
///
/// assert!(validate_amount_cents("subtotal", 1099).is_ok()); // $10.99
/// assert!(validate_amount_cents("tax", 0).is_ok());         // Tax-free
/// assert!(validate_amount_cents("tip", -100).is_err());     // Invalid
/// ```
pub fn validate_amount_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a party size.
///
/// ## Rules
/// - Must be at least 1 (someone has to pay)
/// - Must not exceed MAX_SPLIT_COUNT (100)
pub fn validate_split_count(count: u32) -> ValidationResult<()> {
    if count < 1 || count > MAX_SPLIT_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "split count".to_string(),
            min: 1,
            max: MAX_SPLIT_COUNT as i64,
        });
    }

    Ok(())
}

/// Validates a user-entered tip percentage in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
///
/// This bounds what the percent field accepts. Rates derived from a typed
/// tip amount are not validated here and may exceed 100% (a $5.00 tip on a
/// $2.00 check is a legitimate 250%).
pub fn validate_tip_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TIP_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tip rate".to_string(),
            min: 0,
            max: MAX_TIP_RATE_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
