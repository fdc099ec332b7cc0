//! Database configuration loaded from the environment.

use std::collections::HashMap;
use std::env;
use std::path::Path;

/// SSL mode passed to PostgreSQL. Not configurable.
pub const SSL_MODE: &str = "disable";
/// Session timezone passed to PostgreSQL. Not configurable.
pub const TIMEZONE: &str = "UTC";

pub const DB_HOST: &str = "DB_HOST";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_PORT: &str = "DB_PORT";

/// Errors raised while loading database settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load env file: {0}")]
    EnvFile(String),

    #[error("Missing environment variable: {0}")]
    MissingVariable(&'static str),

    #[error("Invalid database port: {0}")]
    InvalidPort(String),
}

impl From<dotenvy::Error> for ConfigError {
    fn from(err: dotenvy::Error) -> Self {
        ConfigError::EnvFile(err.to_string())
    }
}

/// Connection settings for the comment database.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub port: String,
    pub sslmode: String,
    pub timezone: String,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .field("port", &self.port)
            .field("sslmode", &self.sslmode)
            .field("timezone", &self.timezone)
            .finish()
    }
}

impl DbConfig {
    /// Loads `.env` from the current directory, then reads the settings.
    ///
    /// Same precedence as [`DbConfig::from_env_file`]: keys in the file win,
    /// absent keys fall back to the process environment.
    ///
    /// Fails with [`ConfigError::EnvFile`] when no `.env` can be loaded, even
    /// if the variables are already present in the process environment. Use
    /// [`DbConfig::from_env`] when no env file is expected.
    pub fn load() -> Result<Self, ConfigError> {
        let dir = env::current_dir().map_err(|e| ConfigError::EnvFile(e.to_string()))?;
        Self::load_from(dir)
    }

    /// Loads `<dir>/.env`, then reads the settings.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(".env");
        let config = Self::from_env_file(&path)?;
        tracing::debug!(path = %path.display(), "loaded env file");
        Ok(config)
    }

    /// Reads the settings from the process environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the settings from an explicit env file.
    ///
    /// Keys present in the file win; absent keys fall back to the process
    /// environment. The process environment is not modified.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let vars = dotenvy::from_path_iter(path.as_ref())?
            .collect::<Result<HashMap<String, String>, _>>()?;

        Self::from_lookup(|key| vars.get(key).cloned().or_else(|| env::var(key).ok()))
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVariable(key));

        Ok(Self {
            host: require(DB_HOST)?,
            user: require(DB_USER)?,
            password: require(DB_PASSWORD)?,
            dbname: require(DB_NAME)?,
            port: require(DB_PORT)?,
            sslmode: SSL_MODE.to_string(),
            timezone: TIMEZONE.to_string(),
        })
    }

    /// Parses the port as a TCP port number.
    pub fn port_number(&self) -> Result<u16, ConfigError> {
        self.port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(self.port.clone()))
    }

    /// Renders a libpq key/value connection string.
    ///
    /// Every value is single-quoted so empty values and values with spaces
    /// survive parsing.
    pub fn dsn(&self) -> String {
        [
            ("host", &self.host),
            ("user", &self.user),
            ("password", &self.password),
            ("dbname", &self.dbname),
            ("port", &self.port),
            ("sslmode", &self.sslmode),
            ("TimeZone", &self.timezone),
        ]
        .iter()
        .map(|(key, value)| format!("{key}={}", quote_dsn_value(value)))
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Builds sqlx connect options for PostgreSQL.
    #[cfg(feature = "postgres")]
    pub fn pg_connect_options(&self) -> Result<sqlx::postgres::PgConnectOptions, ConfigError> {
        use sqlx::postgres::{PgConnectOptions, PgSslMode};

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port_number()?)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::Disable)
            .options([("timezone", self.timezone.as_str())]))
    }
}

/// Quotes a libpq connection-string value, escaping backslashes and single quotes.
fn quote_dsn_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
