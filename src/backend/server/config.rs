/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables.
 * Everything is read once at startup; nothing reads the environment after
 * that.
 *
 * # Variables
 *
 * - `MONGODB_HOST`, `MONGODB_DATABASE`, `MONGODB_USERNAME`, `MONGODB_PASSWORD`
 * - `MONGODB_CONNECT_ATTEMPTS`, `MONGODB_CONNECT_BACKOFF_MS`,
 *   `MONGODB_CONNECT_TIMEOUT_SECS`
 * - `SERVER_PORT`
 * - `RECIPES_STORE` (`mongodb` or `memory`)
 */

use std::{fmt::Display, str::FromStr, time::Duration};

use thiserror::Error;

/// MongoDB always listens on the default port
pub const MONGODB_PORT: u16 = 27017;

/// Collection holding the recipe documents
pub const RECIPES_COLLECTION: &str = "recipes";

pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("unknown store backend: {0}")]
    UnknownStore(String),
}

/// Connection settings for the recipes database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl StoreConfig {
    /// Connection string for the configured host on the fixed port
    ///
    /// Credentials are not part of the URI; they are attached to the client
    /// options so the password never needs escaping.
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}", self.host, MONGODB_PORT)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            database: "recipes".to_string(),
            username: None,
            password: None,
        }
    }
}

/// Bounded retry policy for the startup connection
///
/// The delay before attempt `n + 1` is `initial_backoff * 2^(n - 1)`, capped
/// at `max_backoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    /// Delay to wait after the given failed attempt (1-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .checked_mul(factor)
            .unwrap_or(self.max_backoff)
            .min(self.max_backoff)
    }

    /// A policy that tries once and never sleeps
    pub fn once() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(2),
        }
    }
}

/// Which `RecipeStore` implementation backs the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    MongoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub backend: StoreBackend,
    pub store: StoreConfig,
    pub retry: RetryPolicy,
    /// Upper bound on the whole startup connection, retries included
    pub connect_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            backend: StoreBackend::default(),
            store: StoreConfig::default(),
            retry: RetryPolicy::default(),
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let store = StoreConfig {
            host: lookup("MONGODB_HOST").unwrap_or(defaults.store.host),
            database: lookup("MONGODB_DATABASE").unwrap_or(defaults.store.database),
            username: lookup("MONGODB_USERNAME").filter(|u| !u.is_empty()),
            password: lookup("MONGODB_PASSWORD"),
        };

        let retry = RetryPolicy {
            max_attempts: parse_or(&lookup, "MONGODB_CONNECT_ATTEMPTS", defaults.retry.max_attempts)?,
            initial_backoff: Duration::from_millis(parse_or(
                &lookup,
                "MONGODB_CONNECT_BACKOFF_MS",
                defaults.retry.initial_backoff.as_millis() as u64,
            )?),
            max_backoff: defaults.retry.max_backoff,
        };

        let config = Self {
            port: parse_or(&lookup, "SERVER_PORT", defaults.port)?,
            backend: match lookup("RECIPES_STORE") {
                Some(value) => value.parse()?,
                None => defaults.backend,
            },
            store,
            retry,
            connect_timeout: Duration::from_secs(parse_or(
                &lookup,
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )?),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MONGODB_CONNECT_ATTEMPTS",
                message: "at least one attempt is required".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            tracing::warn!("Invalid {} value: {}", key, e);
            ConfigError::InvalidValue {
                key,
                message: e.to_string(),
            }
        }),
        None => {
            tracing::debug!("{} not set, using default", key);
            Ok(default)
        }
    }
}
