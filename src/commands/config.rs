use anyhow::Result;
use colored::Colorize;
use laptop_price_api::config;
use tracing::info;

/// Execute the config show command
pub fn show() -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config()?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate() -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = config::load_config()?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen address: {}:{}", cfg.server.host, cfg.server.port);
    println!("  Model artifact: {}", cfg.artifacts.model_path);
    println!("  Dataset: {}", cfg.artifacts.dataset_path);
    println!("  CORS origins: {}", cfg.cors.allowed_origins.len());

    Ok(())
}
