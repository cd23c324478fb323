//! # Domain Types
//!
//! The cart types that travel across the API boundary and through the Cashier.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐          │
//! │  │        Cart          │ 1    n │        LineItem          │          │
//! │  │  ──────────────────  │───────►│  ──────────────────────  │          │
//! │  │  reference (opaque)  │        │  name (display)          │          │
//! │  │  line_items (order)  │        │  price (input)           │          │
//! │  │  total (computed)    │        │  sku (rule matching)     │          │
//! │  └──────────────────────┘        │  discounted_price (out)  │          │
//! │                                  └──────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input vs Output Fields
//! `price`, `sku`, `name` and `reference` are authoritative input.
//! `discounted_price` and `total` are always recomputed by the Cashier; any
//! values a client sends for them are ignored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Line Item
// =============================================================================

/// A single line in a cart.
///
/// Duplicate SKUs across lines are allowed and kept as separate lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Display name shown on the receipt.
    pub name: String,

    /// Unit price as submitted. Never modified.
    #[ts(type = "number")]
    pub price: Decimal,

    /// Stock Keeping Unit, matched against the promotion rule.
    pub sku: String,

    /// Price after the promotion, rounded to cents.
    #[serde(default)]
    #[ts(type = "number")]
    pub discounted_price: Decimal,
}

impl LineItem {
    /// Creates an unpriced line item.
    pub fn new(name: impl Into<String>, price: Decimal, sku: impl Into<String>) -> Self {
        LineItem {
            name: name.into(),
            price,
            sku: sku.into(),
            discounted_price: Decimal::ZERO,
        }
    }

    /// Returns a copy of this line carrying the given discounted price.
    pub fn priced(&self, discounted_price: Decimal) -> Self {
        LineItem {
            discounted_price,
            ..self.clone()
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A shopping cart submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Opaque client reference, passed through unchanged.
    #[serde(default)]
    pub reference: String,

    /// Line items in submission order.
    #[serde(default)]
    pub line_items: Vec<LineItem>,

    /// Grand total after the promotion.
    #[serde(default)]
    #[ts(type = "number")]
    pub total: Decimal,
}

impl Cart {
    /// Creates an unpriced cart.
    pub fn new(reference: impl Into<String>, line_items: Vec<LineItem>) -> Self {
        Cart {
            reference: reference.into(),
            line_items,
            total: Decimal::ZERO,
        }
    }

    /// Checks if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.line_items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
