use catalog_core::config::{add_layered_sources, validate_log_level, AppConfigError};
use config::Config;
use serde::Deserialize;
use tracing::error;
use validator::Validate;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PORT: u16 = 8082;
const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";
const DEFAULT_CATEGORY_SERVICE_URL: &str = "http://127.0.0.1:8081";

/// Application configuration for the product service.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AppConfig {
    /// Database connection URL
    pub database_url: String,

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

    /// Whether to run database migrations on startup
    #[serde(default = "default_true_bool")]
    pub auto_migrate: bool,

    /// Base URL of the category service used for the cross-service lookup
    #[serde(default = "default_category_service_url")]
    pub category_service_url: String,

    /// Fixed timeout (seconds) for outbound category service calls
    #[serde(default = "default_http_client_timeout_secs")]
    pub http_client_timeout_secs: u64,

    /// Inbound request timeout (seconds); must exceed the outbound timeout so
    /// the client budget bounds total latency end-to-end
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// DB pool: max connections
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,

    /// DB pool: min connections
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    /// DB timeouts (seconds)
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Creates a configuration with explicit core settings; used by tests.
    pub fn new(
        database_url: String,
        host: String,
        port: u16,
        environment: String,
        category_service_url: String,
    ) -> Self {
        Self {
            database_url,
            host,
            port,
            environment,
            log_level: default_log_level(),
            auto_migrate: true,
            category_service_url,
            http_client_timeout_secs: default_http_client_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            db_max_connections: default_db_max_connections(),
            db_min_connections: default_db_min_connections(),
            db_connect_timeout_secs: default_db_connect_timeout_secs(),
            db_acquire_timeout_secs: default_db_acquire_timeout_secs(),
        }
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_true_bool() -> bool {
    true
}

fn default_category_service_url() -> String {
    DEFAULT_CATEGORY_SERVICE_URL.to_string()
}

fn default_http_client_timeout_secs() -> u64 {
    3
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_db_max_connections() -> u32 {
    16
}
fn default_db_min_connections() -> u32 {
    2
}
fn default_db_connect_timeout_secs() -> u64 {
    30
}
fn default_db_acquire_timeout_secs() -> u64 {
    8
}

/// Loads configuration: built-in defaults, optional config files, then
/// `APP__*` environment variables.
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let builder = Config::builder()
        .set_default("database_url", DEFAULT_DATABASE_URL)?
        .set_default("host", "0.0.0.0")?
        .set_default("port", DEFAULT_PORT as i64)?
        .set_default("environment", "development")?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("category_service_url", DEFAULT_CATEGORY_SERVICE_URL)?;

    let config = add_layered_sources(builder).build()?;
    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    Ok(app_config)
}
