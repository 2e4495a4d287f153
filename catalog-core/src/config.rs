use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use validator::ValidationError;

/// Directory holding optional per-environment configuration files.
pub const CONFIG_DIR: &str = "config";

const DEFAULT_ENV: &str = "development";

/// Configuration loading errors shared by every service binary.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Resolves the active configuration profile from RUN_ENV / APP_ENV.
pub fn run_env() -> String {
    env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string())
}

/// Layers the shared configuration sources onto a service-specific builder:
/// optional `config/default.toml`, optional `config/{env}.toml`, then `APP__*`
/// environment variables. Call after the service has set its own defaults.
pub fn add_layered_sources(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    let env_name = run_env();
    info!("Loading configuration for environment: {}", env_name);

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    builder
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, env_name)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
}

/// Validates log level values used in service configs.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// Initializes tracing using the provided log level as the default filter.
///
/// `service` is the binary's module name (underscores, not hyphens) so the
/// default directive targets its own spans plus tower-http request logs.
pub fn init_tracing(service: &str, level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!(
        "{}={},catalog_core={},tower_http=debug",
        service, level, level
    );
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let _ = fmt()
        .with_env_filter(EnvFilter::new(filter_directive))
        .try_init();
}
