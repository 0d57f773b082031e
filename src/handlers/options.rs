use axum::{extract::State, Json};

use crate::{handlers::predict::AppState, models::laptop::OptionsResponse};

/// Handle /options endpoint
/// Returns sorted unique dropdown values for every dataset field
pub async fn get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(state.dataset.options())
}
