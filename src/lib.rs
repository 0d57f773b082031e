pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod handlers;
pub mod model;
pub mod models;
pub mod server;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Note: This function can only be called once. The filter comes from
/// RUST_LOG when set, falling back to "info".
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
