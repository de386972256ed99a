//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::DatabaseConfig;
use thiserror::Error;

/// Configuration errors - all fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set in environment variables")]
    MissingDatabaseUrl,

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT", 5000)?,
            database: DatabaseConfig {
                url,
                max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 10)?,
                min_connections: parse_var(&lookup, "DB_MIN_CONNECTIONS", 1)?,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
