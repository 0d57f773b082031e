//! End-to-end tests driving the full axum router

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use tower::ServiceExt;

use laptop_price_api::config::{ArtifactsConfig, Config, CorsConfig, ServerConfig};
use laptop_price_api::dataset::Dataset;
use laptop_price_api::handlers::predict::AppState;
use laptop_price_api::model::PricePredictor;
use laptop_price_api::server::create_router;

const ARTIFACT_JSON: &str = r#"{
    "intercept": 100.0,
    "numeric": {
        "Ram": { "weight": 50.0, "impute": 0.0 },
        "cpu_speed": { "weight": 100.0, "impute": 2.0 }
    },
    "categorical": {
        "Company": { "Apple": 300.0 }
    },
    "metrics": { "mae": 156.32, "rmse": 289.47, "r2": 0.823 }
}"#;

const SAMPLE_CSV: &str = "\
laptop_ID,Company,Product,TypeName,Inches,ScreenResolution,Cpu,Ram,Memory,Gpu,OpSys,Weight,Price_euros
1,Apple,MacBook Pro,Ultrabook,13.3,IPS Panel Retina Display 2560x1600,Intel Core i5 2.3GHz,8GB,128GB SSD,Intel Iris Plus Graphics 640,macOS,1.37kg,1339.69
2,HP,250 G6,Notebook,15.6,Full HD 1920x1080,Intel Core i5 7200U 2.5GHz,8GB,256GB SSD,Intel HD Graphics 620,No OS,1.86kg,575.0
3,Dell,Inspiron 3567,Notebook,15.6,Full HD 1920x1080,Intel Core i3 6006U 2GHz,4GB,1TB HDD,AMD Radeon R5 M430,Windows 10,2.3kg,498.9
4,Asus,ZenBook Pro,Gaming,15.6,Full HD 1920x1080,Intel Core i7 7700HQ 2.8GHz,16GB,512GB SSD,Nvidia GeForce GTX 1050,Windows 10,2.45kg,2299.0
";

fn build_app() -> Router {
    let mut artifact = tempfile::NamedTempFile::new().unwrap();
    artifact.write_all(ARTIFACT_JSON.as_bytes()).unwrap();
    let predictor = PricePredictor::load(artifact.path()).unwrap();

    let mut csv = tempfile::NamedTempFile::new().unwrap();
    csv.write_all(SAMPLE_CSV.as_bytes()).unwrap();
    let dataset = Dataset::load(csv.path()).unwrap();

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        },
        artifacts: ArtifactsConfig {
            model_path: "unused".to_string(),
            dataset_path: "unused".to_string(),
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
    };

    create_router(AppState {
        config: Arc::new(config),
        predictor: Arc::new(predictor),
        dataset: Arc::new(dataset),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_reports_liveness() {
    let app = build_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Laptop Price Regression API is running.");
}

#[tokio::test]
async fn test_predict_returns_price_in_eur() {
    let app = build_app();

    let spec = json!({
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
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(spec.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    // 100 intercept + 8*50 Ram + 2.3*100 cpu_speed + 300 Apple
    assert!((body["predicted_price"].as_f64().unwrap() - 1030.0).abs() < 1e-9);
    assert_eq!(body["currency"], "EUR");
}

#[tokio::test]
async fn test_predict_imputes_missing_cpu_speed() {
    let app = build_app();

    let spec = json!({
        "Company": "Acme",
        "Product": "Boxy",
        "TypeName": "Notebook",
        "Inches": 15.6,
        "ScreenResolution": "1366x768",
        "Cpu": "Intel Celeron",
        "Ram": 4,
        "Memory": "500GB HDD",
        "Gpu": "Intel HD Graphics",
        "OpSys": "Linux",
        "Weight": 2.1
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(spec.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    // 100 + 4*50 + imputed 2.0*100, unknown company contributes nothing
    assert!((body["predicted_price"].as_f64().unwrap() - 500.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_predict_rejects_malformed_body() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"Company": "Apple"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_options_are_sorted_and_unique() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/options")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["companies"], json!(["Apple", "Asus", "Dell", "HP"]));
    assert_eq!(body["rams_gb"], json!([4, 8, 16]));
    assert_eq!(body["inches"], json!([13.3, 15.6]));
    assert_eq!(body["weights"], json!([1.37, 1.86, 2.3, 2.45]));
}

#[tokio::test]
async fn test_model_performance_chart_data() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/visualizations/model-performance")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["mae"], 156.32);
    assert_eq!(body["r2"], 0.823);
}

#[tokio::test]
async fn test_price_segments_chart_data() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/visualizations/price-segments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let segments = body["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0]["count"], 2);
    assert_eq!(segments[3]["count"], 1);
}

#[tokio::test]
async fn test_actual_vs_predicted_chart_data() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/visualizations/actual-vs-predicted")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let pairs = body["pairs"].as_array().unwrap();
    assert_eq!(pairs.len(), 4);
    assert_eq!(pairs[0]["actual"], 1339.69);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/options")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
