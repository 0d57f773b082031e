//! Wire types for the prediction API
//!
//! The request schema mirrors the dataset's column names, so the JSON keys
//! are PascalCase (`Company`, `TypeName`, `ScreenResolution`, ...).

use serde::{Deserialize, Serialize};

/// Raw laptop specification as submitted to `POST /predict`.
///
/// Free-text fields (`ScreenResolution`, `Cpu`, `Memory`) are parsed by the
/// feature pipeline; everything else passes through to the model unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LaptopSpec {
    pub company: String,
    pub product: String,
    pub type_name: String,
    pub inches: f64,
    pub screen_resolution: String,
    pub cpu: String,
    pub ram: u32,
    pub memory: String,
    pub gpu: String,
    pub op_sys: String,
    pub weight: f64,
}

/// Response body for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
    pub currency: String,
}

/// Response body for `GET /options`: sorted unique dropdown values per
/// dataset field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub companies: Vec<String>,
    pub products: Vec<String>,
    pub typenames: Vec<String>,
    pub screen_resolutions: Vec<String>,
    pub cpus: Vec<String>,
    pub rams_gb: Vec<u32>,
    pub memories: Vec<String>,
    pub gpus: Vec<String>,
    pub opsys: Vec<String>,
    pub inches: Vec<f64>,
    pub weights: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_deserializes_pascal_case() {
        let json = r#"{
            "Company": "Apple",
            "Product": "MacBook Pro",
            "TypeName": "Ultrabook",
            "Inches": 13.3,
            "ScreenResolution": "IPS Panel Retina Display 2560x1600",
            "Cpu": "Intel Core i5 2.3GHz",
            "Ram": 8,
            "Memory": "256GB SSD",
            "Gpu": "Intel Iris Plus Graphics 640",
            "OpSys": "macOS",
            "Weight": 1.37
        }"#;

        let spec: LaptopSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.company, "Apple");
        assert_eq!(spec.type_name, "Ultrabook");
        assert_eq!(spec.op_sys, "macOS");
        assert_eq!(spec.ram, 8);
    }

    #[test]
    fn test_spec_roundtrip_keys() {
        let spec = LaptopSpec {
            company: "Dell".to_string(),
            product: "XPS 13".to_string(),
            type_name: "Ultrabook".to_string(),
            inches: 13.3,
            screen_resolution: "1920x1080".to_string(),
            cpu: "Intel Core i7 2.7GHz".to_string(),
            ram: 16,
            memory: "512GB SSD".to_string(),
            gpu: "Intel HD Graphics 620".to_string(),
            op_sys: "Windows 10".to_string(),
            weight: 1.22,
        };

        let value = serde_json::to_value(&spec).unwrap();
        assert!(value.get("TypeName").is_some());
        assert!(value.get("ScreenResolution").is_some());
        assert!(value.get("OpSys").is_some());
        assert!(value.get("type_name").is_none());
    }

    #[test]
    fn test_prediction_response_shape() {
        let response = PredictionResponse {
            predicted_price: 1234.5,
            currency: "EUR".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["predicted_price"], 1234.5);
        assert_eq!(value["currency"], "EUR");
    }
}
