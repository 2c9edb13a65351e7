use std::{env, time};

use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::ConnectOptions;
use tracing::log::LevelFilter;

/// Settings
#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreBackend,
    pub database: DatabaseSettings,
}

impl Settings {
    /// Get settings from configuration files
    pub fn get_config() -> Result<Self, ConfigError> {
        let path = env::current_dir()
            .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;
        let config_dir = path.join("config");

        // Detect the running environment (default: `dev`)
        let env: Env = env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "dev".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        // Read the configuration from files and environment variables
        Config::builder()
            // Base configuration file
            .add_source(File::from(config_dir.join("base.yaml")).required(true))
            // Environment-specific configuration file
            .add_source(File::from(config_dir.join(format!("{}.yaml", env.as_str()))).required(true))
            // Environment variables (e.g., `NEWSLETTER__APPLICATION__PORT=8888`
            // would set Settings.application.port to 8888)
            .add_source(Environment::with_prefix("NEWSLETTER").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// Application settings
#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    /// Address the HTTP listener binds to
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where subscriber records are kept
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Database settings
#[derive(Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    username: String,
    password: SecretString,
    host: String,
    port: u16,
    database: String,
    require_ssl: bool,
    acquire_timeout_secs: u64,
}

impl DatabaseSettings {
    /// Generate options and flags that can be used to configure a database connection
    pub fn db_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };
        PgConnectOptions::new()
            .username(&self.username)
            .password(self.password.expose_secret())
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .ssl_mode(ssl_mode)
            .log_statements(LevelFilter::Trace)
    }

    /// Maximum time to wait for a pooled connection
    pub const fn acquire_timeout(&self) -> time::Duration {
        time::Duration::from_secs(self.acquire_timeout_secs)
    }
}

/// Available runtime environments
#[derive(Debug)]
pub enum Env {
    Development,
    Production,
}

impl Env {
    /// Represent environment as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prd",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "dev" => Ok(Self::Development),
            "prd" => Ok(Self::Production),
            other => Err(format!(
                "`{other}` is not a supported environment. Use either `dev` or `prd`"
            )),
        }
    }
}
