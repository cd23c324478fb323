//! # Till API
//!
//! HTTP boundary around the till-core Cashier.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till API Server                                │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► TraceLayer ───► Router                   │
//! │                                                 │                       │
//! │                          ┌──────────────────────┴───────────┐          │
//! │                          ▼                                  ▼          │
//! │                 POST /cart/total                      GET /health      │
//! │                 cart_service                          health_service   │
//! │                          │                                             │
//! │                          ▼                                             │
//! │                 till-core (validate, Cashier::compute)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shared State
//! The promotion rule is built once at startup and shared behind an `Arc`.
//! Handlers only ever borrow it, so concurrent requests need no locking.

pub mod config;
pub mod error;
pub mod services;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use till_core::Configuration;

use crate::config::ApiConfig;
use crate::services::{cart_service::cart_total_handler, health_service::health_handler};

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    pub promotion: Configuration,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(promotion: Configuration, config: ApiConfig) -> Self {
        AppState { promotion, config }
    }
}

/// Builds the HTTP router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/cart/total", post(cart_total_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable.
/// Defaults to `info` globally and `debug` for Till crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,till_api=debug,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn router() -> Router {
        build_router(Arc::new(AppState::new(
            Configuration::reference(),
            ApiConfig::default(),
        )))
    }

    fn post_json(body: impl Into<String>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/cart/total")
            .header("content-type", "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    const DEFAULT_CART: &str = r#"{
        "cart": {
            "reference": "2d832fe0-6c96-4515-9be7-4c00983539c1",
            "lineItems": [
                {"name": "Peanut Butter", "price": 39.0, "sku": "PEANUT-BUTTER"},
                {"name": "Fruity", "price": 34.99, "sku": "FRUITY"},
                {"name": "Chocolate", "price": 32, "sku": "CHOCOLATE"}
            ]
        }
    }"#;

    #[tokio::test]
    async fn test_cart_total_default_cart() {
        let (status, json) = send(router(), post_json(DEFAULT_CART)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["reference"], "2d832fe0-6c96-4515-9be7-4c00983539c1");
        assert_eq!(json["total"].as_f64(), Some(89.99));

        let items = json["lineItems"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2]["sku"], "CHOCOLATE");
        assert_eq!(items[2]["price"].as_f64(), Some(32.0));
        assert_eq!(items[2]["discountedPrice"].as_f64(), Some(16.0));
        assert_eq!(items[1]["discountedPrice"].as_f64(), Some(34.99));
    }

    #[tokio::test]
    async fn test_cart_total_response_round_trips_as_cart() {
        let response = router().oneshot(post_json(DEFAULT_CART)).await.unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        let cart: till_core::Cart = serde_json::from_slice(&body).unwrap();

        assert_eq!(cart.total, Decimal::new(8999, 2));
    }

    #[tokio::test]
    async fn test_cart_total_ignores_client_totals() {
        let body = r#"{"cart": {
            "reference": "r",
            "lineItems": [
                {"name": "Banana Cake", "price": 36, "sku": "BANANA-CAKE", "discountedPrice": 1},
                {"name": "Chocolate", "price": 32, "sku": "CHOCOLATE"}
            ],
            "total": 5
        }}"#;

        let (status, json) = send(router(), post_json(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"].as_f64(), Some(68.0));
        assert_eq!(json["lineItems"][0]["discountedPrice"].as_f64(), Some(36.0));
    }

    #[tokio::test]
    async fn test_cart_total_empty_cart() {
        let body = r#"{"cart": {"reference": "r", "lineItems": [], "total": 0}}"#;

        let (status, json) = send(router(), post_json(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "empty cart");
    }

    #[tokio::test]
    async fn test_cart_total_malformed_json() {
        let (status, json) = send(router(), post_json("{\"cart\": ")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_PAYLOAD");
        assert_eq!(json["message"], "invalid payload");
    }

    #[tokio::test]
    async fn test_cart_total_wrong_shape() {
        let body = r#"{"cart": {"reference": "r", "lineItems": [{"name": "X", "price": "free", "sku": "X"}]}}"#;

        let (status, json) = send(router(), post_json(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_PAYLOAD");
    }

    #[tokio::test]
    async fn test_cart_total_negative_price() {
        let body = r#"{"cart": {"reference": "r", "lineItems": [{"name": "X", "price": -1, "sku": "X"}]}}"#;

        let (status, json) = send(router(), post_json(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_cart_total_cashier_error_is_generic() {
        let promotion = Configuration::new(
            ["PEANUT-BUTTER"],
            ["CHOCOLATE"],
            till_core::DiscountUnit::Other("fixed".to_string()),
            Decimal::from(5),
        )
        .unwrap();
        let app = build_router(Arc::new(AppState::new(promotion, ApiConfig::default())));

        let (status, json) = send(app, post_json(DEFAULT_CART)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_CART");
        assert_eq!(json["message"], "invalid cart data");
    }

    #[tokio::test]
    async fn test_cart_total_without_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/cart/total")
            .body(Body::from(DEFAULT_CART))
            .unwrap();

        let (status, json) = send(router(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"].as_f64(), Some(89.99));
    }

    #[tokio::test]
    async fn test_cart_total_prices_unusual_skus() {
        let body = r#"{"cart": {"reference": "r", "lineItems": [
            {"name": "Peanut Butter", "price": 39, "sku": "PEANUT-BUTTER"},
            {"name": "Dotted", "price": 10, "sku": "SKU.1"},
            {"name": "Blank", "price": 5, "sku": ""}
        ]}}"#;

        let (status, json) = send(router(), post_json(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"].as_f64(), Some(54.0));
    }

    #[tokio::test]
    async fn test_cart_total_large_cart() {
        let items = vec![
            r#"{"name": "Peanut Butter", "price": 39, "sku": "PEANUT-BUTTER"}"#;
            101
        ];
        let body = format!(r#"{{"cart": {{"reference": "r", "lineItems": [{}]}}}}"#, items.join(","));

        let (status, json) = send(router(), post_json(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["lineItems"].as_array().unwrap().len(), 101);
        assert_eq!(json["total"].as_f64(), Some(3939.0));
    }

    #[tokio::test]
    async fn test_cart_total_missing_reference() {
        let body = r#"{"cart": {"lineItems": [{"name": "Chocolate", "price": 32, "sku": "CHOCOLATE"}]}}"#;

        let (status, json) = send(router(), post_json(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["reference"], "");
        assert_eq!(json["total"].as_f64(), Some(32.0));
    }

    #[tokio::test]
    async fn test_cart_total_missing_cart() {
        let (status, json) = send(router(), post_json("{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "empty cart");
    }

    #[tokio::test]
    async fn test_body_limit() {
        let config = ApiConfig {
            max_body_bytes: 16,
            ..ApiConfig::default()
        };
        let app = build_router(Arc::new(AppState::new(Configuration::reference(), config)));

        let (status, json) = send(app, post_json(DEFAULT_CART)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_PAYLOAD");
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }
}
