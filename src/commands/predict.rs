use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use laptop_price_api::{config, features, model::PricePredictor, models::laptop::LaptopSpec};

/// Execute the predict command
///
/// Scores a single specification file with the configured model artifact,
/// without starting the HTTP server.
pub fn execute(spec_path: PathBuf) -> Result<()> {
    let cfg = config::load_config()?;

    let raw = fs::read_to_string(&spec_path)
        .with_context(|| format!("failed to read {}", spec_path.display()))?;
    let spec: LaptopSpec = serde_json::from_str(&raw)
        .context("specification JSON does not match the /predict request schema")?;

    let predictor = PricePredictor::load(&cfg.artifacts.model_path)?;

    let record = features::assemble(&spec);
    let price = predictor.predict(&record)?;

    println!(
        "{} {} {}",
        spec.company.bold(),
        spec.product.bold(),
        format!("({})", spec.type_name).dimmed()
    );
    println!("{} {:.2} EUR", "Predicted price:".green(), price);

    Ok(())
}
