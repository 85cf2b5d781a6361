//! Application configuration
//!
//! Configuration is layered: built-in defaults, then `config/default.toml`,
//! then `config/{RUN_MODE}.toml`, then environment variables prefixed with
//! `APP` (e.g. `APP__SERVER__PORT=9090`). A bare `DATABASE_URL` variable
//! overrides `database.url` last, since that is what most deployment
//! platforms provide.

use std::net::{SocketAddr, ToSocketAddrs};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS. Empty means cross-origin requests are refused.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// PostgreSQL connection and pool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string. Usually supplied via `DATABASE_URL`.
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_pool_min_size")]
    pub pool_min_size: u32,
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: u32,
    /// Seconds to wait for a connection from the pool before giving up.
    #[serde(default = "default_pool_timeout_seconds")]
    pub pool_timeout_seconds: u64,
    /// Per-session `statement_timeout`, applied on every new connection.
    #[serde(default = "default_statement_timeout_seconds")]
    pub statement_timeout_seconds: u64,
    /// Per-session `lock_timeout`, applied on every new connection.
    #[serde(default = "default_lock_timeout_seconds")]
    pub lock_timeout_seconds: u64,
    /// Run embedded migrations on startup.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub file_enabled: bool,
    #[serde(default = "default_log_directory")]
    pub file_directory: String,
    #[serde(default = "default_log_prefix")]
    pub file_prefix: String,
    /// One of `daily`, `hourly`, `minutely`, `never`.
    #[serde(default = "default_log_rotation")]
    pub file_rotation: String,
}

/// CDN cache lifetimes, in seconds, for the two response shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_list_max_age")]
    pub list_max_age_seconds: u32,
    #[serde(default = "default_list_stale")]
    pub list_stale_seconds: u32,
    #[serde(default = "default_detail_max_age")]
    pub detail_max_age_seconds: u32,
    #[serde(default = "default_detail_stale")]
    pub detail_stale_seconds: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_pool_min_size() -> u32 {
    1
}

fn default_pool_max_size() -> u32 {
    10
}

fn default_pool_timeout_seconds() -> u64 {
    30
}

fn default_statement_timeout_seconds() -> u64 {
    30
}

fn default_lock_timeout_seconds() -> u64 {
    5
}

fn default_run_migrations() -> bool {
    false
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "logs".to_string()
}

fn default_log_prefix() -> String {
    "facility-server".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

fn default_list_max_age() -> u32 {
    300
}

fn default_list_stale() -> u32 {
    600
}

fn default_detail_max_age() -> u32 {
    600
}

fn default_detail_stale() -> u32 {
    1200
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            pool_min_size: default_pool_min_size(),
            pool_max_size: default_pool_max_size(),
            pool_timeout_seconds: default_pool_timeout_seconds(),
            statement_timeout_seconds: default_statement_timeout_seconds(),
            lock_timeout_seconds: default_lock_timeout_seconds(),
            run_migrations: default_run_migrations(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file_enabled: false,
            file_directory: default_log_directory(),
            file_prefix: default_log_prefix(),
            file_rotation: default_log_rotation(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            list_max_age_seconds: default_list_max_age(),
            list_stale_seconds: default_list_stale(),
            detail_max_age_seconds: default_detail_max_age(),
            detail_stale_seconds: default_detail_stale(),
        }
    }
}

impl Config {
    /// Load configuration from files and the environment.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env if present; ignore absence.
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        let mut config: Config = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // DATABASE_URL wins over files and APP__DATABASE__URL.
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                config.database.url = url;
            }
        }

        Ok(config)
    }

    /// Check invariants the type system cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.database.url.is_empty() {
            return Err(
                "database.url is not set; provide DATABASE_URL or APP__DATABASE__URL".to_string(),
            );
        }

        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }

        if self.database.pool_max_size == 0 {
            return Err("database.pool_max_size must be at least 1".to_string());
        }

        if self.database.pool_min_size > self.database.pool_max_size {
            return Err(format!(
                "database.pool_min_size ({}) exceeds pool_max_size ({})",
                self.database.pool_min_size, self.database.pool_max_size
            ));
        }

        match self.logging.file_rotation.as_str() {
            "daily" | "hourly" | "minutely" | "never" => {}
            other => {
                return Err(format!(
                    "logging.file_rotation must be daily, hourly, minutely or never, got {other}"
                ));
            }
        }

        // Reject bad origins at boot rather than silently dropping them later.
        for origin in &self.server.cors_origins {
            if axum::http::HeaderValue::from_str(origin).is_err() {
                return Err(format!("server.cors_origins entry is not a valid origin: {origin}"));
            }
        }

        Ok(())
    }

    /// Resolve the configured host and port to a socket address.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.to_socket_addrs()
            .with_context(|| format!("Failed to resolve listen address {addr}"))?
            .next()
            .ok_or_else(|| anyhow::anyhow!("Listen address {addr} resolved to nothing"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.database.url = "postgres://localhost/facilities".to_string();
        config
    }

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.database.pool_max_size, 10);
        assert!(!config.database.run_migrations);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.cache.list_max_age_seconds, 300);
        assert_eq!(config.cache.detail_stale_seconds, 1200);
    }

    #[test]
    fn validate_accepts_a_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_database_url() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert!(err.contains("database.url"));
    }

    #[test]
    fn validate_rejects_inverted_pool_bounds() {
        let mut config = valid_config();
        config.database.pool_min_size = 20;
        config.database.pool_max_size = 5;
        let err = config.validate().unwrap_err();
        assert!(err.contains("pool_min_size"));
    }

    #[test]
    fn validate_rejects_unknown_rotation() {
        let mut config = valid_config();
        config.logging.file_rotation = "weekly".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("file_rotation"));
    }

    #[test]
    fn validate_rejects_unparseable_cors_origin() {
        let mut config = valid_config();
        config.server.cors_origins = vec!["https://ok.example".to_string(), "bad\norigin".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.contains("cors_origins"));
    }

    #[test]
    fn socket_addr_resolves_numeric_host() {
        let mut config = valid_config();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:9090");
    }
}
