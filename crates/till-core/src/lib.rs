//! # till-core: Pure Pricing Logic for Till
//!
//! This crate is the **heart** of Till. It prices a shopping cart under a
//! single promotion rule, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till-api (HTTP boundary)                     │   │
//! │  │    POST /cart/total ──► decode ──► validate ──► encode          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  cashier  │  │ validation│  │   │
//! │  │   │   Cart    │  │   Money   │  │  compute  │  │   rules   │  │   │
//! │  │   │ LineItem  │  │ rounding  │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────────────────┐                                │   │
//! │  │   │ promotion: Configuration  │  immutable, built once         │   │
//! │  │   └───────────────────────────┘                                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire-level domain types (Cart, LineItem)
//! - [`money`] - Money type in integer cents, plus the rounding primitive
//! - [`promotion`] - The promotion rule (Configuration, DiscountUnit)
//! - [`cashier`] - Discount evaluation and price computation
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary-side input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use till_core::{Cart, Cashier, Configuration, LineItem};
//!
//! let config = Configuration::reference();
//! let cart = Cart::new(
//!     "2d832fe0-6c96-4515-9be7-4c00983539c1",
//!     vec![
//!         LineItem::new("Peanut Butter", Decimal::new(3900, 2), "PEANUT-BUTTER"),
//!         LineItem::new("Chocolate", Decimal::new(3200, 2), "CHOCOLATE"),
//!     ],
//! );
//!
//! let priced = Cashier::new(&config).compute(&cart).unwrap();
//!
//! // Chocolate is half price once peanut butter is in the cart
//! assert_eq!(priced.line_items[1].discounted_price, Decimal::new(1600, 2));
//! assert_eq!(priced.total, Decimal::new(5500, 2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cashier;
pub mod error;
pub mod money;
pub mod promotion;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cashier::Cashier;
pub use error::{CashierError, CashierResult, ValidationError};
pub use money::Money;
pub use promotion::{Configuration, DiscountUnit};
pub use types::{Cart, LineItem};
