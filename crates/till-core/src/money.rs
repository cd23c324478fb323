//! # Money Module
//!
//! Provides the `Money` type for rounded monetary values, and the single
//! rounding primitive that turns an exact decimal amount into one.
//!
//! ## Exact Decimals In, Whole Cents Out
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    17.495 is stored as 17.49499999...  → "%.2f" gives 17.49  ❌         │
//! │                                                                         │
//! │  OUR SOLUTION: Decimal intermediates, integer cents results             │
//! │    34.99 × 50 / 100 = 17.495 (exact Decimal)                           │
//! │    Money::round_from(17.495) = 1750 cents (half away from zero) ✅      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use till_core::money::Money;
//!
//! let price = Money::round_from(Decimal::new(17495, 3)).unwrap();
//! assert_eq!(price.cents(), 1750);
//! assert_eq!(price.to_decimal(), Decimal::new(1750, 2));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CashierError, CashierResult};

/// Number of fractional digits every rounded amount carries.
pub const CENT_PRECISION: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Discounts above 100% are rejected upstream, but the
///   type itself does not forbid negatives
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Only produced by rounding**: every `Money` in a priced cart came out
///   of [`Money::round_from`], so sums of it are exact
///
/// ## Where Money is Used
/// ```text
/// LineItem.price ──► discount ──► round_from ──► Money ──┬──► discounted_price
///                                                        │
///                                                        └──► Σ ──► total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Rounds an exact decimal amount to whole cents.
    ///
    /// ## Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF AWAY FROM ZERO (to 2 fractional digits)                 │
    /// │                                                                     │
    /// │    17.494 → 17.49     17.495 → 17.50     -5.505 → -5.51            │
    /// │                                                                     │
    /// │  For the non-negative prices a cart carries, this is simply        │
    /// │  "round to the nearest cent, halves go up".                        │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Errors
    /// [`CashierError::Rounding`] when the amount does not fit in i64 cents.
    pub fn round_from(value: Decimal) -> CashierResult<Money> {
        value
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|scaled| {
                scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            })
            .and_then(|rounded| rounded.to_i64())
            .map(Money)
            .ok_or(CashierError::Rounding { value })
    }

    /// Returns the value as a decimal with exactly two fractional digits.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1600).to_decimal().to_string(), "16.00");
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, CENT_PRECISION)
    }

    /// Adds two amounts, returning `None` on i64 overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
