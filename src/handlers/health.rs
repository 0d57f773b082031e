use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

/// Root liveness endpoint
/// The message is load-bearing: existing frontends string-match it
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Laptop Price Regression API is running.",
    }))
}

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "laptop-price-api",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
