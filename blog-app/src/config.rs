//! Configuration loading from environment.

use std::env;

#[cfg(feature = "postgres")]
use blog_repo::{ConfigError, DbConfig};

const DEFAULT_PORT: u16 = 3000;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: DbConfig,
    #[cfg(all(feature = "sqlite", not(feature = "postgres")))]
    pub database_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = parse_port(env::var("PORT").ok().as_deref())?;

        #[cfg(feature = "postgres")]
        let config = Self {
            port,
            database: load_db_config()?,
        };

        #[cfg(all(feature = "sqlite", not(feature = "postgres")))]
        let config = Self {
            port,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?,
        };

        Ok(config)
    }
}

/// Prefers `./.env`; without one, the process environment alone is used.
#[cfg(feature = "postgres")]
fn load_db_config() -> Result<DbConfig, ConfigError> {
    match DbConfig::load() {
        Err(ConfigError::EnvFile(e)) => {
            tracing::warn!("No .env file for database settings ({}), using process environment", e);
            DbConfig::from_env()
        }
        other => other,
    }
}

fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {:?}", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults() {
        assert_eq!(parse_port(None).unwrap(), 3000);
        assert_eq!(parse_port(Some("")).unwrap(), 3000);
    }

    #[test]
    fn test_port_parses() {
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    }

    #[test]
    fn test_invalid_port_fails() {
        assert!(parse_port(Some("http")).is_err());
        assert!(parse_port(Some("70000")).is_err());
    }
}
