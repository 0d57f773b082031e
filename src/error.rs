use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::dataset::DatasetError;
use crate::model::ModelError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Configuration error
    ConfigError(String),
    /// Model artifact failure (load or schema mismatch)
    Model(ModelError),
    /// Dataset failure
    Dataset(DatasetError),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::Model(err) => write!(f, "Model error: {}", err),
            Self::Dataset(err) => write!(f, "Dataset error: {}", err),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ConfigError(_)
            | Self::Model(_)
            | Self::Dataset(_)
            | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::ConfigError(_) => "config_error",
        AppError::Model(_) => "model_error",
        AppError::Dataset(_) => "dataset_error",
        AppError::InternalError(_) => "internal_error",
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        Self::Model(err)
    }
}

impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        Self::Dataset(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}
