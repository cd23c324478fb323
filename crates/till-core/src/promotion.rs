//! # Promotion Rule
//!
//! The single, immutable promotion rule the Cashier prices against.
//!
//! ## Rule Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "If ANY prerequisite SKU is in the cart,                               │
//! │   discount the CHEAPEST eligible item by discount_value (unit)."        │
//! │                                                                         │
//! │  prerequisite_skus ── activates ──┐                                    │
//! │                                   ▼                                     │
//! │  eligible_skus ─── candidates ──► cheapest ──► discount_unit/value     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Built once before the first request and shared read-only for the whole
//! process lifetime. There are no setters: a different rule means a
//! different `Configuration` value.

use std::collections::HashSet;
use std::fmt;

use rust_decimal::Decimal;

use crate::validation::{validate_discount_value, ValidationResult};

// =============================================================================
// Discount Unit
// =============================================================================

/// How `discount_value` is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiscountUnit {
    /// `discount_value` percent of the cheapest eligible price.
    Percentage,

    /// A unit name the Cashier has no pricing rule for.
    ///
    /// Names are not normalized: `Other("Percentage")` is still unsupported.
    Other(String),
}

impl DiscountUnit {
    /// Returns the unit's name as written in configuration.
    pub fn as_str(&self) -> &str {
        match self {
            DiscountUnit::Percentage => "percentage",
            DiscountUnit::Other(name) => name,
        }
    }
}

impl fmt::Display for DiscountUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Prerequisite SKUs of the reference deployment.
pub const REFERENCE_PREREQUISITE_SKUS: [&str; 3] = ["PEANUT-BUTTER", "COCOA", "FRUITY"];

/// Eligible SKUs of the reference deployment.
pub const REFERENCE_ELIGIBLE_SKUS: [&str; 3] = ["BANANA-CAKE", "COCOA", "CHOCOLATE"];

/// Discount percentage of the reference deployment.
pub const REFERENCE_DISCOUNT_PERCENT: i64 = 50;

/// An immutable promotion rule.
///
/// SKU lists are turned into sets once, here, so every membership check
/// during pricing is O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    prerequisite_skus: HashSet<String>,
    eligible_skus: HashSet<String>,
    discount_unit: DiscountUnit,
    discount_value: Decimal,
}

impl Configuration {
    /// Builds a promotion rule after validating the discount value.
    ///
    /// ## Errors
    /// - negative `discount_value`
    /// - `Percentage` with a value above 100
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use till_core::{Configuration, DiscountUnit};
    ///
    /// let config = Configuration::new(
    ///     ["COFFEE"],
    ///     ["CROISSANT", "MUFFIN"],
    ///     DiscountUnit::Percentage,
    ///     Decimal::from(25),
    /// )
    /// .unwrap();
    ///
    /// assert!(config.is_prerequisite("COFFEE"));
    /// assert!(config.is_eligible("MUFFIN"));
    /// ```
    pub fn new<P, E>(
        prerequisite_skus: P,
        eligible_skus: E,
        discount_unit: DiscountUnit,
        discount_value: Decimal,
    ) -> ValidationResult<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        validate_discount_value(&discount_unit, discount_value)?;

        Ok(Configuration {
            prerequisite_skus: prerequisite_skus.into_iter().map(Into::into).collect(),
            eligible_skus: eligible_skus.into_iter().map(Into::into).collect(),
            discount_unit,
            discount_value,
        })
    }

    /// The compiled-in rule of the reference deployment.
    ///
    /// Prerequisites: PEANUT-BUTTER, COCOA, FRUITY.
    /// Eligible: BANANA-CAKE, COCOA, CHOCOLATE. Discount: 50 percent.
    pub fn reference() -> Self {
        Configuration {
            prerequisite_skus: REFERENCE_PREREQUISITE_SKUS
                .iter()
                .map(|sku| sku.to_string())
                .collect(),
            eligible_skus: REFERENCE_ELIGIBLE_SKUS
                .iter()
                .map(|sku| sku.to_string())
                .collect(),
            discount_unit: DiscountUnit::Percentage,
            discount_value: Decimal::from(REFERENCE_DISCOUNT_PERCENT),
        }
    }

    /// Checks whether a SKU activates the promotion.
    #[inline]
    pub fn is_prerequisite(&self, sku: &str) -> bool {
        self.prerequisite_skus.contains(sku)
    }

    /// Checks whether a SKU may receive the discount.
    #[inline]
    pub fn is_eligible(&self, sku: &str) -> bool {
        self.eligible_skus.contains(sku)
    }

    pub fn prerequisite_skus(&self) -> &HashSet<String> {
        &self.prerequisite_skus
    }

    pub fn eligible_skus(&self) -> &HashSet<String> {
        &self.eligible_skus
    }

    pub fn discount_unit(&self) -> &DiscountUnit {
        &self.discount_unit
    }

    pub fn discount_value(&self) -> Decimal {
        self.discount_value
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_reference_rule() {
        let config = Configuration::reference();

        assert!(config.is_prerequisite("PEANUT-BUTTER"));
        assert!(config.is_prerequisite("COCOA"));
        assert!(config.is_prerequisite("FRUITY"));
        assert!(!config.is_prerequisite("CHOCOLATE"));

        assert!(config.is_eligible("BANANA-CAKE"));
        assert!(config.is_eligible("COCOA"));
        assert!(config.is_eligible("CHOCOLATE"));
        assert!(!config.is_eligible("PEANUT-BUTTER"));

        assert_eq!(config.discount_unit(), &DiscountUnit::Percentage);
        assert_eq!(config.discount_value(), Decimal::from(50));
    }

    #[test]
    fn test_duplicate_skus_collapse_into_sets() {
        let config = Configuration::new(
            ["A", "A", "B"],
            ["C", "C"],
            DiscountUnit::Percentage,
            Decimal::from(10),
        )
        .unwrap();

        assert_eq!(config.prerequisite_skus().len(), 2);
        assert_eq!(config.eligible_skus().len(), 1);
    }

    #[test]
    fn test_sku_matching_is_exact() {
        let config = Configuration::reference();
        assert!(!config.is_prerequisite("peanut-butter"));
        assert!(!config.is_eligible("CHOCOLATE "));
    }

    #[test]
    fn test_negative_discount_rejected() {
        let result = Configuration::new(
            ["A"],
            ["B"],
            DiscountUnit::Percentage,
            Decimal::from(-5),
        );
        assert!(matches!(
            result,
            Err(ValidationError::MustNotBeNegative { .. })
        ));
    }

    #[test]
    fn test_percentage_above_hundred_rejected() {
        let result = Configuration::new(
            ["A"],
            ["B"],
            DiscountUnit::Percentage,
            Decimal::new(10001, 2),
        );
        assert!(matches!(result, Err(ValidationError::AboveMaximum { .. })));
    }

    #[test]
    fn test_unknown_unit_still_constructs() {
        let config = Configuration::new(
            ["A"],
            ["B"],
            DiscountUnit::Other("fixed".to_string()),
            Decimal::from(500),
        )
        .unwrap();
        assert_eq!(config.discount_unit().to_string(), "fixed");
    }

    #[test]
    fn test_only_exact_percentage_is_supported() {
        for name in ["Percentage", " percentage ", "PERCENTAGE", "percent"] {
            let unit = DiscountUnit::Other(name.to_string());
            assert_ne!(unit, DiscountUnit::Percentage);
            assert_eq!(unit.as_str(), name);
        }
        assert_eq!(DiscountUnit::Percentage.to_string(), "percentage");
    }
}
