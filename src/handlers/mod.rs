//! HTTP handlers
//!
//! - predict: price prediction from a raw specification
//! - options: dropdown catalog from the dataset
//! - charts: aggregated data series for the visualization pages
//! - health: liveness endpoints

pub mod charts;
pub mod health;
pub mod options;
pub mod predict;
