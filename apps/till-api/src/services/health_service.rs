//! Health check endpoint for monitoring and load balancers.

use axum::response::IntoResponse;

/// Liveness probe. The server holds no external connections, so being
/// able to answer is the whole check.
pub async fn health_handler() -> impl IntoResponse {
    "OK"
}
