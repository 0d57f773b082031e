use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    config::{Config, CorsConfig},
    dataset::Dataset,
    handlers::{self, predict::AppState},
    model::PricePredictor,
};

/// Start the prediction API server
///
/// This function:
/// 1. Loads the model artifact and the dataset (read-only afterwards)
/// 2. Creates the Axum application
/// 3. Binds to the configured address
/// 4. Serves requests with graceful shutdown support
pub async fn start_server(config: Config) -> Result<()> {
    info!(path = %config.artifacts.model_path, "Loading model artifact...");
    let predictor = Arc::new(PricePredictor::load(&config.artifacts.model_path)?);

    info!(path = %config.artifacts.dataset_path, "Loading dataset...");
    let dataset = Arc::new(Dataset::load(&config.artifacts.dataset_path)?);
    info!(rows = dataset.len(), "Dataset loaded");

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let app_state = AppState {
        config: Arc::new(config),
        predictor,
        dataset,
    };
    let app = create_router(app_state);

    info!("Starting Laptop Price API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, draining connections...");
}

/// Create the Axum router with all routes and middleware
pub fn create_router(app_state: AppState) -> Router {
    let cors = build_cors(&app_state.config.cors);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/predict", post(handlers::predict::predict_price))
        .route("/options", get(handlers::options::get_options))
        .route(
            "/visualizations/price-distribution",
            get(handlers::charts::price_distribution),
        )
        .route(
            "/visualizations/brand-analysis",
            get(handlers::charts::brand_analysis),
        )
        .route(
            "/visualizations/type-distribution",
            get(handlers::charts::type_distribution),
        )
        .route(
            "/visualizations/ram-vs-price",
            get(handlers::charts::ram_vs_price),
        )
        .route(
            "/visualizations/screen-size-analysis",
            get(handlers::charts::screen_size_analysis),
        )
        .route(
            "/visualizations/os-comparison",
            get(handlers::charts::os_comparison),
        )
        .route(
            "/visualizations/model-performance",
            get(handlers::charts::model_performance),
        )
        .route(
            "/visualizations/price-segments",
            get(handlers::charts::price_segments),
        )
        .route(
            "/visualizations/actual-vs-predicted",
            get(handlers::charts::actual_vs_predicted),
        )
        .with_state(app_state)
        // Prediction bodies are small; anything close to this limit is abuse
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer from configuration
///
/// A single "*" entry allows any origin. Origins that do not parse as
/// header values are dropped with a warning.
fn build_cors(cfg: &CorsConfig) -> CorsLayer {
    if cfg.allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
