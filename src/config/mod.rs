//! Configuration module for the members backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Maximum number of pooled database connections
    pub db_max_connections: u32,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit log lines as JSON
    pub log_json: bool,
}

/// An environment variable holding a value we cannot use.
#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} value: {:?}", self.var, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("MEMBERS_DB_PATH")
            .unwrap_or_else(|_| "./data/members.sqlite".to_string())
            .into();

        let db_max_connections = parse_var(
            "MEMBERS_DB_MAX_CONNECTIONS",
            &crate::db::DEFAULT_MAX_CONNECTIONS.to_string(),
        )?;
        let bind_addr = parse_var("MEMBERS_BIND_ADDR", "127.0.0.1:8080")?;

        let log_level = env::var("MEMBERS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("MEMBERS_LOG_JSON")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            db_path,
            db_max_connections,
            bind_addr,
            log_level,
            log_json,
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = env::var(var).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|_| ConfigError { var, value })
}
