//! # Cashier
//!
//! Prices a cart under one promotion rule.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cashier::compute                                 │
//! │                                                                         │
//! │  1. has_prerequisite ── any SKU in prerequisite set? ──── no ──┐       │
//! │          │ yes                                                  │       │
//! │          ▼                                                      │       │
//! │  2. eligible_items ──── ordered, duplicates kept ───── empty ──┤       │
//! │          │ non-empty                                            │       │
//! │          ▼                                                      │       │
//! │  3. cheapest_item ───── strictly-lower wins (first on ties)     │       │
//! │          │                                                      │       │
//! │          ▼                                                      │       │
//! │  4. discount_amount ─── percentage only                         │       │
//! │          │                                                      │       │
//! │          ▼                                                      ▼       │
//! │  5. every line with the winning SKU: price − amount    others: price   │
//! │  6. round each line to cents (half away from zero)                      │
//! │  7. total = Σ rounded lines                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching By SKU
//! Step 5 matches on SKU value, not on the selected line. When the winning
//! SKU appears on several lines, every one of them is discounted by the
//! amount computed from the cheapest occurrence.

use rust_decimal::Decimal;

use crate::error::{CashierError, CashierResult};
use crate::money::Money;
use crate::promotion::{Configuration, DiscountUnit};
use crate::types::{Cart, LineItem};

/// The discount chosen for a cart: which SKU, and how much off each line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AppliedDiscount<'a> {
    sku: &'a str,
    amount: Decimal,
}

/// Prices carts against a borrowed, immutable promotion rule.
///
/// A `Cashier` holds nothing but the reference, so one can be built per
/// request and many can run concurrently over the same [`Configuration`].
#[derive(Debug, Clone, Copy)]
pub struct Cashier<'c> {
    config: &'c Configuration,
}

impl<'c> Cashier<'c> {
    pub fn new(config: &'c Configuration) -> Self {
        Cashier { config }
    }

    /// Returns a newly priced copy of `cart`.
    ///
    /// The input is never modified. Any `discounted_price` or `total` it
    /// carries is ignored and recomputed.
    ///
    /// ## Errors
    /// - [`CashierError::UnsupportedDiscountUnit`] when a discount applies
    ///   but the rule's unit is not `percentage`
    /// - [`CashierError::Rounding`] when a price cannot be expressed in cents
    /// - [`CashierError::ArithmeticOverflow`] on decimal or total overflow
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use till_core::{Cart, Cashier, Configuration, LineItem};
    ///
    /// let config = Configuration::reference();
    /// let cart = Cart::new("no-promo", vec![
    ///     LineItem::new("Banana Cake", Decimal::from(36), "BANANA-CAKE"),
    ///     LineItem::new("Chocolate", Decimal::from(32), "CHOCOLATE"),
    /// ]);
    ///
    /// let priced = Cashier::new(&config).compute(&cart).unwrap();
    /// assert_eq!(priced.total, Decimal::from(68));
    /// ```
    pub fn compute(&self, cart: &Cart) -> CashierResult<Cart> {
        let discount = self.select_discount(&cart.line_items)?;

        let mut total = Money::zero();
        let mut line_items = Vec::with_capacity(cart.line_items.len());

        for item in &cart.line_items {
            let discounted = match &discount {
                Some(applied) if applied.sku == item.sku => item
                    .price
                    .checked_sub(applied.amount)
                    .ok_or(CashierError::ArithmeticOverflow {
                        operation: "subtracting the discount",
                    })?,
                _ => item.price,
            };

            let rounded = Money::round_from(discounted)?;
            total = total
                .checked_add(rounded)
                .ok_or(CashierError::ArithmeticOverflow {
                    operation: "summing the cart total",
                })?;

            line_items.push(item.priced(rounded.to_decimal()));
        }

        // Every line is already whole cents, so the sum needs no further rounding.
        Ok(Cart {
            reference: cart.reference.clone(),
            line_items,
            total: total.to_decimal(),
        })
    }

    /// Steps 1-4: decide whether a discount applies and to which SKU.
    fn select_discount<'i>(
        &self,
        items: &'i [LineItem],
    ) -> CashierResult<Option<AppliedDiscount<'i>>> {
        if !self.has_prerequisite(items) {
            return Ok(None);
        }

        let eligible = self.eligible_items(items);
        if eligible.is_empty() {
            return Ok(None);
        }

        let cheapest = Self::cheapest_item(&eligible)?;
        let amount = self.discount_amount(cheapest.price)?;

        Ok(Some(AppliedDiscount {
            sku: &cheapest.sku,
            amount,
        }))
    }

    /// Checks whether any line item activates the promotion.
    pub fn has_prerequisite(&self, items: &[LineItem]) -> bool {
        items
            .iter()
            .any(|item| self.config.is_prerequisite(&item.sku))
    }

    /// Returns the line items whose SKU is eligible, in cart order.
    ///
    /// Duplicate SKUs stay as separate entries.
    pub fn eligible_items<'i>(&self, items: &'i [LineItem]) -> Vec<&'i LineItem> {
        items
            .iter()
            .filter(|item| self.config.is_eligible(&item.sku))
            .collect()
    }

    /// Returns the cheapest candidate, preferring the earliest on ties.
    ///
    /// ## Errors
    /// [`CashierError::EmptyEligibleList`] when `candidates` is empty.
    pub fn cheapest_item<'i>(candidates: &[&'i LineItem]) -> CashierResult<&'i LineItem> {
        let (first, rest) = candidates
            .split_first()
            .ok_or(CashierError::EmptyEligibleList)?;

        Ok(rest.iter().copied().fold(*first, |cheapest, item| {
            if item.price < cheapest.price {
                item
            } else {
                cheapest
            }
        }))
    }

    /// Computes the discount taken off a line priced at `price`.
    ///
    /// ## Errors
    /// - [`CashierError::UnsupportedDiscountUnit`] for any unit but percentage
    /// - [`CashierError::ArithmeticOverflow`] if the product overflows
    pub fn discount_amount(&self, price: Decimal) -> CashierResult<Decimal> {
        match self.config.discount_unit() {
            DiscountUnit::Percentage => price
                .checked_mul(self.config.discount_value())
                .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
                .ok_or(CashierError::ArithmeticOverflow {
                    operation: "computing the discount amount",
                }),
            DiscountUnit::Other(unit) => Err(CashierError::UnsupportedDiscountUnit {
                unit: unit.clone(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


// =============================================================================
// Property Tests
// =============================================================================
