use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    config::Config,
    dataset::Dataset,
    error::AppError,
    features,
    model::PricePredictor,
    models::laptop::{LaptopSpec, PredictionResponse},
};

/// Application state
///
/// The model and dataset are loaded once at startup and shared read-only;
/// handlers never mutate them, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub predictor: Arc<PricePredictor>,
    pub dataset: Arc<Dataset>,
}

/// Handle /predict endpoint
///
/// Runs the feature pipeline on the submitted specification and scores the
/// resulting record with the loaded model. Prices are EUR.
pub async fn predict_price(
    State(state): State<AppState>,
    Json(spec): Json<LaptopSpec>,
) -> Result<Json<PredictionResponse>, AppError> {
    tracing::info!(
        company = %spec.company,
        product = %spec.product,
        type_name = %spec.type_name,
        "Handling prediction request"
    );

    let record = features::assemble(&spec);
    let predicted_price = state.predictor.predict(&record)?;

    tracing::debug!(
        predicted_price,
        total_storage = record.total_storage,
        cpu_brand = %record.cpu_brand,
        "Prediction complete"
    );

    Ok(Json(PredictionResponse {
        predicted_price,
        currency: "EUR".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::create_test_state;

    fn sample_spec() -> LaptopSpec {
        LaptopSpec {
            company: "Apple".to_string(),
            product: "MacBook Pro".to_string(),
            type_name: "Ultrabook".to_string(),
            inches: 13.3,
            screen_resolution: "IPS Panel Retina Display 2560x1600".to_string(),
            cpu: "Intel Core i5 2.3GHz".to_string(),
            ram: 8,
            memory: "256GB SSD".to_string(),
            gpu: "Intel Iris Plus Graphics 640".to_string(),
            op_sys: "macOS".to_string(),
            weight: 1.37,
        }
    }

    #[tokio::test]
    async fn test_predict_price() {
        let state = create_test_state();
        let response = predict_price(State(state), Json(sample_spec()))
            .await
            .unwrap();

        // 200 intercept + 8*60 Ram + 256*0.5 storage + 250 Apple
        assert!((response.0.predicted_price - 1058.0).abs() < 1e-9);
        assert_eq!(response.0.currency, "EUR");
    }

    #[tokio::test]
    async fn test_predict_price_unknown_company_still_scores() {
        let state = create_test_state();
        let mut spec = sample_spec();
        spec.company = "Unseen Brand".to_string();

        let response = predict_price(State(state), Json(spec)).await.unwrap();
        assert!((response.0.predicted_price - 808.0).abs() < 1e-9);
    }
}
