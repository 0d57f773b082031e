//! Command implementations for the CLI
//!
//! - serve: Start the API server
//! - config: Configuration display and validation
//! - predict: One-off offline prediction

pub mod config;
pub mod predict;
pub mod serve;
