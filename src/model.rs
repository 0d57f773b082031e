//! Price prediction from a serialized linear pipeline
//!
//! The artifact is the trained pipeline exported to JSON: an intercept, a
//! weight and imputation value per numeric column, and a weight table per
//! categorical column (one-hot with ignore-unknown semantics). Loaded once
//! at startup and read-only afterwards, so concurrent predictions need no
//! locking.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::features::FeatureRecord;

/// Errors from loading or applying the model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model artifact {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The artifact references a feature column the pipeline does not
    /// produce. A schema mismatch is the caller's problem, not a degraded
    /// default, so it propagates.
    #[error("model artifact references unknown feature column {0:?}")]
    UnknownFeature(String),
}

/// Weight for one numeric column, with the value substituted when the
/// feature is absent (same role as the training pipeline's imputer).
#[derive(Debug, Clone, Deserialize)]
pub struct NumericTerm {
    pub weight: f64,
    #[serde(default)]
    pub impute: f64,
}

/// Held-out evaluation metrics recorded when the pipeline was exported.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ModelMetrics {
    pub mae: f64,
    pub rmse: f64,
    pub r2: f64,
}

/// Serialized linear-regression pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub intercept: f64,
    /// Column name -> weight/imputation, e.g. "Ram", "cpu_speed".
    pub numeric: HashMap<String, NumericTerm>,
    /// Column name -> (value -> weight). Values missing from the table
    /// contribute zero, matching one-hot encoding with unknowns ignored.
    pub categorical: HashMap<String, HashMap<String, f64>>,
    pub metrics: ModelMetrics,
}

/// The loaded pricing model. Deterministic and side-effect-free.
#[derive(Debug, Clone)]
pub struct PricePredictor {
    artifact: ModelArtifact,
}

impl PricePredictor {
    /// Load the pipeline artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self::from_artifact(artifact))
    }

    /// Wrap an already-deserialized artifact.
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        for name in artifact.numeric.keys() {
            if !NUMERIC_COLUMNS.contains(&name.as_str()) {
                warn!(column = %name, "model artifact uses a numeric column the feature pipeline does not produce");
            }
        }
        for name in artifact.categorical.keys() {
            if !CATEGORICAL_COLUMNS.contains(&name.as_str()) {
                warn!(column = %name, "model artifact uses a categorical column the feature pipeline does not produce");
            }
        }

        Self { artifact }
    }

    /// Evaluation metrics recorded in the artifact.
    pub fn metrics(&self) -> ModelMetrics {
        self.artifact.metrics
    }

    /// Predict the price in EUR for one feature record.
    ///
    /// Absent optional numerics use the artifact's imputation value; unknown
    /// categorical values contribute zero. An artifact column with no
    /// counterpart in [`FeatureRecord`] is a schema mismatch and surfaces as
    /// [`ModelError::UnknownFeature`].
    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
        let mut price = self.artifact.intercept;

        for (name, term) in &self.artifact.numeric {
            let value = numeric_value(record, name)
                .ok_or_else(|| ModelError::UnknownFeature(name.clone()))?
                .unwrap_or(term.impute);
            price += term.weight * value;
        }

        for (name, table) in &self.artifact.categorical {
            let value = categorical_value(record, name)
                .ok_or_else(|| ModelError::UnknownFeature(name.clone()))?;
            price += table.get(value).copied().unwrap_or(0.0);
        }

        Ok(price)
    }
}

/// Numeric columns the feature pipeline produces, under the names used at
/// training time.
const NUMERIC_COLUMNS: &[&str] = &[
    "Inches",
    "Ram",
    "Weight",
    "SSD",
    "HDD",
    "Hybrid",
    "Flash_Storage",
    "Total_Storage",
    "cpu_speed",
    "resolution_x",
    "resolution_y",
    "is_ips",
    "is_retina",
];

/// Categorical columns the feature pipeline produces.
const CATEGORICAL_COLUMNS: &[&str] = &[
    "Company",
    "Product",
    "TypeName",
    "Gpu",
    "OpSys",
    "cpu_brand",
    "cpu_model",
];

/// Look up a numeric column on the record. Outer `None` means the column
/// does not exist; inner `None` means the feature is absent for this record.
fn numeric_value(record: &FeatureRecord, name: &str) -> Option<Option<f64>> {
    let value = match name {
        "Inches" => Some(record.inches),
        "Ram" => Some(f64::from(record.ram)),
        "Weight" => Some(record.weight),
        "SSD" => Some(f64::from(record.ssd)),
        "HDD" => Some(f64::from(record.hdd)),
        "Hybrid" => Some(f64::from(record.hybrid)),
        "Flash_Storage" => Some(f64::from(record.flash_storage)),
        "Total_Storage" => Some(f64::from(record.total_storage)),
        "cpu_speed" => record.cpu_speed,
        "resolution_x" => record.resolution_x.map(f64::from),
        "resolution_y" => record.resolution_y.map(f64::from),
        "is_ips" => Some(f64::from(u8::from(record.is_ips))),
        "is_retina" => Some(f64::from(u8::from(record.is_retina))),
        _ => return None,
    };
    Some(value)
}

/// Look up a categorical column on the record.
fn categorical_value<'a>(record: &'a FeatureRecord, name: &str) -> Option<&'a str> {
    match name {
        "Company" => Some(&record.company),
        "Product" => Some(&record.product),
        "TypeName" => Some(&record.type_name),
        "Gpu" => Some(&record.gpu),
        "OpSys" => Some(&record.op_sys),
        "cpu_brand" => Some(&record.cpu_brand),
        "cpu_model" => Some(&record.cpu_model),
        _ => None,
    }
}
