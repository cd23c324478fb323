//! # Validation Module
//!
//! Input validation utilities for Till.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (till-api)                                   │
//! │  └── Shape and type checks → "invalid payload"                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called by till-api)                             │
//! │  ├── Cart must not be empty → "empty cart"                             │
//! │  └── Line item prices must not be negative                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cashier                                                      │
//! │  └── Assumes a validated cart; never re-checks emptiness               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use till_core::validation::validate_cart;
//! use till_core::{Cart, LineItem};
//!
//! let cart = Cart::new("ref", vec![LineItem::new("Cocoa", Decimal::from(35), "COCOA")]);
//! assert!(validate_cart(&cart).is_ok());
//!
//! let empty = Cart::new("ref", vec![]);
//! assert_eq!(validate_cart(&empty).unwrap_err().to_string(), "empty cart");
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::promotion::DiscountUnit;
use crate::types::{Cart, LineItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for a percentage discount.
const MAX_PERCENTAGE: i64 = 100;

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates a cart submission before it reaches the Cashier.
///
/// ## Rules
/// - At least one line item
/// - Every line item passes [`validate_line_item`]
///
/// SKUs and cart size are not restricted: any SKU string is priced, it
/// just never matches the promotion unless listed there.
pub fn validate_cart(cart: &Cart) -> ValidationResult<()> {
    if cart.is_empty() {
        return Err(ValidationError::Empty {
            field: "cart".to_string(),
        });
    }

    cart.line_items.iter().try_for_each(validate_line_item)
}

/// Validates a single line item.
///
/// Price must be non-negative (zero is allowed: free items).
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    if item.price < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Promotion Validators
// =============================================================================

/// Validates a discount value against its unit.
///
/// ## Rules
/// - Must be non-negative
/// - A percentage must not exceed 100, so a discounted price never drops
///   below zero
/// - Values for other units are only checked for sign; the Cashier rejects
///   the unit itself when it is used
pub fn validate_discount_value(unit: &DiscountUnit, value: Decimal) -> ValidationResult<()> {
    if value < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "discount_value".to_string(),
        });
    }

    if *unit == DiscountUnit::Percentage && value > Decimal::from(MAX_PERCENTAGE) {
        return Err(ValidationError::AboveMaximum {
            field: "discount_value".to_string(),
            max: Decimal::from(MAX_PERCENTAGE),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
