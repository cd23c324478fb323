//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CashierError     - Price computation failures (terminal)          │
//! │  └── ValidationError  - Input / rule validation failures               │
//! │                                                                         │
//! │  till-api errors (separate crate)                                      │
//! │  └── ApiError         - What the HTTP client sees (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError ──┐                                             │
//! │        CashierError ─────┴──► ApiError ──► 400 + generic message       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (unit, value, field)
//! 3. Errors are enum variants, never String
//! 4. No core error is retryable: the computation is pure

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Cashier Error
// =============================================================================

/// Errors raised while pricing a cart.
///
/// Every variant is terminal for the request: there are no partial results
/// and nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CashierError {
    /// The configured discount unit has no pricing rule.
    ///
    /// ## When This Occurs
    /// Only once a cheapest eligible item has been selected. A cart that
    /// never activates the promotion is priced without looking at the unit.
    #[error("Unsupported discount unit: {unit}")]
    UnsupportedDiscountUnit { unit: String },

    /// Cheapest-item selection was asked to choose from nothing.
    ///
    /// `Cashier::compute` guards against this before selecting, so it only
    /// surfaces when the selection step is called directly.
    #[error("Cannot select the cheapest item from an empty eligible list")]
    EmptyEligibleList,

    /// A value could not be rounded into whole cents.
    #[error("Failed to round {value} to cents")]
    Rounding { value: Decimal },

    /// Checked decimal or cent arithmetic overflowed.
    #[error("Arithmetic overflow while {operation}")]
    ArithmeticOverflow { operation: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a submission or a promotion rule doesn't meet
/// requirements. Used for early validation before any pricing runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required collection was submitted empty.
    #[error("empty {field}")]
    Empty { field: String },

    /// Numeric value must not be below zero.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value exceeds its upper bound.
    #[error("{field} must be at most {max}")]
    AboveMaximum { field: String, max: Decimal },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CashierError.
pub type CashierResult<T> = Result<T, CashierError>;

// =============================================================================
// Unit Tests
// =============================================================================
