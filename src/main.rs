use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use laptop_price_api::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Initialize tracing/logging early
    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Serve => {
            commands::serve::execute().await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show()?,
            cli::ConfigCommands::Validate => commands::config::validate()?,
        },
        cli::Commands::Predict { spec } => {
            commands::predict::execute(spec)?;
        }
        cli::Commands::Version => {
            println!("Laptop Price API v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
