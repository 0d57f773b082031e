//! Visualization data endpoints
//!
//! The dashboard frontend renders these series itself; every endpoint
//! returns JSON aggregates computed from the startup dataset snapshot.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{analytics, error::AppError, handlers::predict::AppState};

/// Rows replayed through the model for the actual-vs-predicted chart.
const ACTUAL_VS_PREDICTED_LIMIT: usize = 200;

/// Handle /visualizations/price-distribution
pub async fn price_distribution(State(state): State<AppState>) -> Json<Value> {
    let bins = analytics::price_distribution(&state.dataset);
    Json(json!({ "bins": bins }))
}

/// Handle /visualizations/brand-analysis
pub async fn brand_analysis(State(state): State<AppState>) -> Json<Value> {
    let brands = analytics::brand_analysis(&state.dataset);
    Json(json!({ "average_price_by_brand": brands }))
}

/// Handle /visualizations/type-distribution
pub async fn type_distribution(State(state): State<AppState>) -> Json<Value> {
    let types = analytics::type_distribution(&state.dataset);
    Json(json!({ "counts_by_type": types }))
}

/// Handle /visualizations/ram-vs-price
pub async fn ram_vs_price(State(state): State<AppState>) -> Json<Value> {
    let points = analytics::ram_vs_price(&state.dataset);
    Json(json!({ "points": points }))
}

/// Handle /visualizations/screen-size-analysis
pub async fn screen_size_analysis(State(state): State<AppState>) -> Json<Value> {
    let analysis = analytics::screen_size_analysis(&state.dataset);
    Json(json!({
        "distribution": analysis.distribution,
        "average_price_by_size": analysis.average_price_by_size,
    }))
}

/// Handle /visualizations/os-comparison
pub async fn os_comparison(State(state): State<AppState>) -> Json<Value> {
    let systems = analytics::os_comparison(&state.dataset);
    Json(json!({ "average_price_by_os": systems }))
}

/// Handle /visualizations/model-performance
/// Returns the held-out metrics recorded in the model artifact
pub async fn model_performance(State(state): State<AppState>) -> Json<Value> {
    let metrics = state.predictor.metrics();
    Json(json!({
        "mae": metrics.mae,
        "rmse": metrics.rmse,
        "r2": metrics.r2,
    }))
}

/// Handle /visualizations/price-segments
pub async fn price_segments(State(state): State<AppState>) -> Json<Value> {
    let segments = analytics::price_segments(&state.dataset);
    Json(json!({ "segments": segments }))
}

/// Handle /visualizations/actual-vs-predicted
///
/// Replays dataset rows through the full feature pipeline and model, so the
/// chart reflects the pipeline actually serving /predict.
pub async fn actual_vs_predicted(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let pairs = analytics::actual_vs_predicted(
        &state.dataset,
        &state.predictor,
        ACTUAL_VS_PREDICTED_LIMIT,
    )?;
    Ok(Json(json!({ "pairs": pairs })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::create_test_state;

    #[tokio::test]
    async fn test_price_distribution_covers_every_row() {
        let state = create_test_state();
        let body = price_distribution(State(state)).await.0;

        let total: u64 = body["bins"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["count"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_model_performance_reports_artifact_metrics() {
        let state = create_test_state();
        let body = model_performance(State(state)).await.0;

        assert_eq!(body["mae"], 156.32);
        assert_eq!(body["rmse"], 289.47);
        assert_eq!(body["r2"], 0.823);
    }

    #[tokio::test]
    async fn test_actual_vs_predicted_pairs() {
        let state = create_test_state();
        let body = actual_vs_predicted(State(state)).await.unwrap().0;

        let pairs = body["pairs"].as_array().unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0]["actual"], 1339.69);
    }
}
