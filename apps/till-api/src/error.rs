//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Till                                   │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /cart/total                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler: Result<Json<Cart>, ApiError>                           │  │
//! │  │         │                                                        │  │
//! │  │  Bad JSON? ───────── serde_json::Error ──── INVALID_PAYLOAD ────►│  │
//! │  │         │                                                        │  │
//! │  │  Validation Error? ─ ValidationError ────── VALIDATION_ERROR ───►│  │
//! │  │         │                                                        │  │
//! │  │  Cashier Error? ──── CashierError (logged) ─ INVALID_CART ──────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is a client error: the Cashier is pure, so nothing here
//! maps to a 5xx.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use till_core::{CashierError, ValidationError};

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "empty cart"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body is not JSON or not a cart (400)
    InvalidPayload,

    /// Input validation failed (400)
    ValidationError,

    /// The Cashier refused the cart (400)
    InvalidCart,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidPayload | ErrorCode::ValidationError | ErrorCode::InvalidCart => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid payload error.
    pub fn invalid_payload() -> Self {
        ApiError::new(ErrorCode::InvalidPayload, "invalid payload")
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates the generic cart error.
    pub fn invalid_cart() -> Self {
        ApiError::new(ErrorCode::InvalidCart, "invalid cart data")
    }
}

/// Converts body read failures (including the size limit) to API errors.
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Failed to read request body");
        ApiError::invalid_payload()
    }
}

/// Converts JSON decode failures to API errors.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!(error = %err, "Rejected request body");
        ApiError::invalid_payload()
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts cashier errors to API errors.
impl From<CashierError> for ApiError {
    fn from(err: CashierError) -> Self {
        // Log the actual error but return a generic message
        tracing::error!(error = %err, "Cart total computation failed");
        ApiError::invalid_cart()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_value(ApiError::invalid_cart()).unwrap();
        assert_eq!(json["code"], "INVALID_CART");
        assert_eq!(json["message"], "invalid cart data");
    }

    #[test]
    fn test_cashier_errors_are_hidden() {
        let err: ApiError = CashierError::UnsupportedDiscountUnit {
            unit: "fixed".to_string(),
        }
        .into();

        assert_eq!(err.code, ErrorCode::InvalidCart);
        assert!(!err.message.contains("fixed"));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err: ApiError = ValidationError::Empty {
            field: "cart".to_string(),
        }
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "empty cart");
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
    }
}
