//! # Error Types
//!
//! Validation error types for tipsplit-core.
//!
//! The engine itself exposes no fallible operations. Every mutator on
//! [`Ledger`](crate::ledger::Ledger) accepts any value of its parameter
//! type, and the one genuine edge case, a zero tip base, is defined
//! arithmetic rather than a failure (see
//! [`Rate::from_ratio`](crate::types::Rate::from_ratio)). What remains is
//! input validation: the decimal keypad and the people picker are expected
//! to reject out-of-range values before they reach the engine, and the
//! checks in [`validation`](crate::validation) give the presentation layer
//! one place to do that.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures.
///
/// Produced only by the [`validation`](crate::validation) helpers. These
/// occur before an edit is committed; a value that passes validation is
/// stored by the engine without further checks.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Monetary amount is negative.
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
