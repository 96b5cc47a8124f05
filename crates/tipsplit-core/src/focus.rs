//! # Focus Order
//!
//! The fixed ordering the keyboard toolbar walks when the user taps the
//! previous/next chevrons: Subtotal → Tax → Tip Percentage → Tip Amount.
//!
//! Which field (if any) currently holds focus lives with the presentation
//! layer as an `Option<FocusField>`; `None` means the keyboard is
//! dismissed. Walking off either end returns `None`, which the toolbar
//! uses to disable the matching chevron, and `None.and_then(...)` keeps
//! the unfocused case a no-op without special handling.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A focusable input field, in keyboard-navigation order.
///
/// Exactly one field can hold focus at a time; modeling the focused field
/// as a single optional value (rather than one flag per field) makes the
/// "two fields focused at once" state unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FocusField {
    Subtotal,
    Tax,
    TipRate,
    TipAmount,
}

impl FocusField {
    /// All fields in traversal order.
    pub const ORDER: [FocusField; 4] = [
        FocusField::Subtotal,
        FocusField::Tax,
        FocusField::TipRate,
        FocusField::TipAmount,
    ];

    /// The field after this one; `None` past the last field.
    pub const fn next(self) -> Option<FocusField> {
        match self {
            FocusField::Subtotal => Some(FocusField::Tax),
            FocusField::Tax => Some(FocusField::TipRate),
            FocusField::TipRate => Some(FocusField::TipAmount),
            FocusField::TipAmount => None,
        }
    }

    /// The field before this one; `None` before the first field.
    pub const fn previous(self) -> Option<FocusField> {
        match self {
            FocusField::Subtotal => None,
            FocusField::Tax => Some(FocusField::Subtotal),
            FocusField::TipRate => Some(FocusField::Tax),
            FocusField::TipAmount => Some(FocusField::TipRate),
        }
    }

    /// Display name shown in the keyboard toolbar's focused-field label.
    pub const fn label(self) -> &'static str {
        match self {
            FocusField::Subtotal => "Subtotal",
            FocusField::Tax => "Tax",
            FocusField::TipRate => "Tip Percentage",
            FocusField::TipAmount => "Tip Amount",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_the_whole_order() {
        let mut walked = vec![FocusField::Subtotal];
        while let Some(field) = walked.last().unwrap().next() {
            walked.push(field);
        }
        assert_eq!(walked, FocusField::ORDER);
    }

    #[test]
    fn test_previous_walks_the_order_backwards() {
        let mut walked = vec![FocusField::TipAmount];
        while let Some(field) = walked.last().unwrap().previous() {
            walked.push(field);
        }
        walked.reverse();
        assert_eq!(walked, FocusField::ORDER);
    }

    #[test]
    fn test_ends_have_no_neighbor() {
        assert_eq!(FocusField::Subtotal.previous(), None);
        assert_eq!(FocusField::TipAmount.next(), None);
    }

    #[test]
    fn test_next_and_previous_invert() {
        for field in FocusField::ORDER {
            if let Some(after) = field.next() {
                assert_eq!(after.previous(), Some(field));
            }
            if let Some(before) = field.previous() {
                assert_eq!(before.next(), Some(field));
            }
        }
    }

    #[test]
    fn test_unfocused_stays_unfocused() {
        let focused: Option<FocusField> = None;
        assert_eq!(focused.and_then(FocusField::next), None);
        assert_eq!(focused.and_then(FocusField::previous), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FocusField::Subtotal.label(), "Subtotal");
        assert_eq!(FocusField::Tax.label(), "Tax");
        assert_eq!(FocusField::TipRate.label(), "Tip Percentage");
        assert_eq!(FocusField::TipAmount.label(), "Tip Amount");
    }
}
