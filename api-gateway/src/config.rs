use catalog_core::config::{add_layered_sources, validate_log_level, AppConfigError};
use config::Config;
use serde::Deserialize;
use tracing::error;
use validator::Validate;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CATEGORIA_SERVICE_URL: &str = "http://127.0.0.1:8081";
const DEFAULT_PRODUCTO_SERVICE_URL: &str = "http://127.0.0.1:8082";

/// Application configuration for the gateway.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AppConfig {
    /// Server host address
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Application environment
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Base URL of the category service
    #[serde(default = "default_categoria_service_url")]
    pub categoria_service_url: String,

    /// Base URL of the product service
    #[serde(default = "default_producto_service_url")]
    pub producto_service_url: String,

    /// Timeout (seconds) for forwarded upstream calls
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Preflight cache window (seconds) advertised to browsers
    #[serde(default = "default_cors_max_age_secs")]
    pub cors_max_age_secs: u64,
}

impl AppConfig {
    /// Creates a configuration with explicit routing targets; used by tests.
    pub fn new(
        host: String,
        port: u16,
        environment: String,
        categoria_service_url: String,
        producto_service_url: String,
    ) -> Self {
        Self {
            host,
            port,
            environment,
            log_level: default_log_level(),
            categoria_service_url,
            producto_service_url,
            upstream_timeout_secs: default_upstream_timeout_secs(),
            cors_max_age_secs: default_cors_max_age_secs(),
        }
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_categoria_service_url() -> String {
    DEFAULT_CATEGORIA_SERVICE_URL.to_string()
}

fn default_producto_service_url() -> String {
    DEFAULT_PRODUCTO_SERVICE_URL.to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    10
}

fn default_cors_max_age_secs() -> u64 {
    3600
}

/// Loads configuration: built-in defaults, optional config files, then
/// `APP__*` environment variables.
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let builder = Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", DEFAULT_PORT as i64)?
        .set_default("environment", "development")?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("categoria_service_url", DEFAULT_CATEGORIA_SERVICE_URL)?
        .set_default("producto_service_url", DEFAULT_PRODUCTO_SERVICE_URL)?;

    let config = add_layered_sources(builder).build()?;
    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    Ok(app_config)
}
