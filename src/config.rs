use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub artifacts: ArtifactsConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactsConfig {
    /// Serialized linear pipeline (JSON)
    pub model_path: String,
    /// Static dataset CSV backing /options and the chart endpoints
    pub dataset_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; a single "*" entry allows any origin
    pub allowed_origins: Vec<String>,
}

pub fn load_config() -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::with_name("config"))
        .add_source(config::Environment::with_prefix("PRICE_API").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    if !matches!(
        cfg.server.log_level.as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    ) {
        anyhow::bail!("Invalid log level: {}", cfg.server.log_level);
    }

    if !matches!(cfg.server.log_format.as_str(), "text" | "json") {
        anyhow::bail!("Invalid log format: {}", cfg.server.log_format);
    }

    if cfg.artifacts.model_path.is_empty() {
        anyhow::bail!("Model artifact path cannot be empty");
    }

    if cfg.artifacts.dataset_path.is_empty() {
        anyhow::bail!("Dataset path cannot be empty");
    }

    if cfg.cors.allowed_origins.is_empty() {
        anyhow::bail!("At least one CORS origin must be configured (use \"*\" to allow any)");
    }

    Ok(())
}
