//! Cart total endpoint.
//!
//! ## Request Pipeline
//! ```text
//! POST /cart/total
//!     │
//!     ├── decode   {"cart": {...}}          ── fail ──► 400 INVALID_PAYLOAD
//!     ├── validate validate_cart            ── fail ──► 400 VALIDATION_ERROR
//!     ├── compute  Cashier::compute         ── fail ──► 400 INVALID_CART
//!     └── encode   priced Cart              ──────────► 200
//! ```
//!
//! The body is decoded as JSON regardless of its `Content-Type` header.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info};

use till_core::validation::validate_cart;
use till_core::{Cart, Cashier};

use crate::error::ApiError;
use crate::AppState;

/// Request body for `POST /cart/total`.
///
/// A missing `cart` decodes as an empty cart and is then rejected by
/// validation as "empty cart".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartTotalRequest {
    #[serde(default)]
    pub cart: Cart,
}

impl CartTotalRequest {
    /// Decodes a request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Prices the submitted cart against the shared promotion rule.
pub async fn cart_total_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Cart>, ApiError> {
    let cart = CartTotalRequest::from_slice(&body?)?.cart;

    debug!(
        reference = %cart.reference,
        items = cart.item_count(),
        "Cart total requested"
    );

    validate_cart(&cart)?;

    let priced = Cashier::new(&state.promotion).compute(&cart)?;

    info!(
        reference = %priced.reference,
        items = priced.item_count(),
        total = %priced.total,
        "Cart total computed"
    );

    Ok(Json(priced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_from_slice_missing_cart_is_empty() {
        let request = CartTotalRequest::from_slice(b"{}").unwrap();
        assert!(request.cart.is_empty());
        assert_eq!(request.cart.reference, "");
    }

    #[test]
    fn test_from_slice_rejects_non_json() {
        let err = CartTotalRequest::from_slice(b"cart=1").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPayload);
        assert_eq!(err.message, "invalid payload");
    }
}
