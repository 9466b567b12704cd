//! Application configuration management
//!
//! Configuration is read from environment variables (optionally via a `.env`
//! file) once at startup.

use std::env;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_LOG_LEVEL,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub commands: CommandsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

/// Batch command configuration
#[derive(Debug, Clone, Default)]
pub struct CommandsConfig {
    /// Fixed seed for the bib shuffle; OS entropy when unset
    pub shuffle_seed: Option<u64>,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            commands: CommandsConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_or("SERVER_PORT", env::var("SERVER_PORT").ok(), DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            log_format: parse_or("LOG_FORMAT", env::var("LOG_FORMAT").ok(), LogFormat::default())?,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                env::var("DATABASE_MAX_CONNECTIONS").ok(),
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            acquire_timeout_secs: parse_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                env::var("DATABASE_ACQUIRE_TIMEOUT_SECS").ok(),
                DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS,
            )?,
        })
    }
}

impl CommandsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let shuffle_seed = env::var("BIB_SHUFFLE_SEED")
            .ok()
            .map(|raw| parse_or("BIB_SHUFFLE_SEED", Some(raw), 0u64))
            .transpose()?;

        Ok(Self { shuffle_seed })
    }
}

/// Parse a raw variable value, falling back to `default` when it is unset
fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
