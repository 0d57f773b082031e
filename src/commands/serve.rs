use anyhow::Result;
use colored::Colorize;
use laptop_price_api::{config, server};
use tracing::info;

/// Execute the serve command
///
/// Loads configuration and runs the server until shutdown.
pub async fn execute() -> Result<()> {
    println!("{}", "Starting Laptop Price API...".green());

    let cfg = config::load_config()?;
    info!(
        host = %cfg.server.host,
        port = cfg.server.port,
        "Configuration loaded"
    );

    server::start_server(cfg).await?;

    Ok(())
}
