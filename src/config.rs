use std::env;

use derive_more::Display;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://castellers.db?mode=rwc";

#[derive(Debug, Display)]
pub enum ConfigError {
    #[display(fmt = "invalid value for {}: '{}'", _0, _1)]
    Invalid(&'static str, String),
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub port: u16,
    pub max_connections: u32,
    /// Identifier registered as admin at startup, so a fresh database can be used at all.
    pub bootstrap_admin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid("PORT", v))?,
            None => 8080,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid("DB_MAX_CONNECTIONS", v)),
            },
            None => 5,
        };
        let bootstrap_admin = match lookup("BOOTSTRAP_ADMIN") {
            Some(v) if v.is_empty() => None,
            Some(v) if v.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) => Some(v),
            Some(v) => return Err(ConfigError::Invalid("BOOTSTRAP_ADMIN", v)),
            None => None,
        };
        Ok(Config {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            max_connections,
            bootstrap_admin,
        })
    }
}
