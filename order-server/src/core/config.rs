use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::{AppError, AppResult};

/// Repository backend selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Process-local store, lost on exit
    #[default]
    Memory,
    /// SurrealDB document store
    Surreal,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Surreal => "surreal",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "memory" | "mem" => Ok(Self::Memory),
            "surreal" | "surrealdb" | "mongo" | "document" => Ok(Self::Surreal),
            other => Err(AppError::config(format!("Unknown order backend: {other}"))
                .with_detail("variable", "ORDER_DB")),
        }
    }
}

/// Document store connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Endpoint understood by `surrealdb::engine::any` (`mem://`, `ws://host:port`, ...)
    pub url: String,
    pub namespace: String,
    pub database: String,
    /// Root credentials, only used when both are set
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mem://".into(),
            namespace: "orders".into(),
            database: "orders".into(),
            username: None,
            password: None,
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | runtime environment |
/// | HTTP_PORT | 8080 | HTTP listen port |
/// | ORDER_DB | memory | `memory` or `surreal` (`mongo`/`document` accepted) |
/// | DATABASE_URL | mem:// | SurrealDB endpoint |
/// | DATABASE_NS | orders | SurrealDB namespace |
/// | DATABASE_NAME | orders | SurrealDB database |
/// | DATABASE_USER / DATABASE_PASS | unset | root sign-in |
/// | REQUEST_TIMEOUT_MS | 30000 | deadline of each repository call |
/// | LOG_LEVEL | info | filter used when `RUST_LOG` is unset |
/// | LOG_DIR | unset | daily rolling log directory |
///
/// # Example
///
/// ```ignore
/// ORDER_DB=surreal DATABASE_URL=ws://localhost:8000 HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub http_port: u16,
    pub backend: Backend,
    pub database: DatabaseConfig,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            http_port: 8080,
            backend: Backend::Memory,
            database: DatabaseConfig::default(),
            request_timeout_ms: 30000,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable numeric values fall back to defaults. An unknown
    /// `ORDER_DB` value is an error.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let db_defaults = DatabaseConfig::default();

        let backend = match lookup("ORDER_DB") {
            Some(value) => value.parse()?,
            None => defaults.backend,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            backend,
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").unwrap_or(db_defaults.url),
                namespace: lookup("DATABASE_NS").unwrap_or(db_defaults.namespace),
                database: lookup("DATABASE_NAME").unwrap_or(db_defaults.database),
                username: lookup("DATABASE_USER").filter(|v| !v.is_empty()),
                password: lookup("DATABASE_PASS").filter(|v| !v.is_empty()),
            },
            request_timeout_ms: lookup("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.request_timeout_ms),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: lookup("LOG_DIR").filter(|v| !v.is_empty()),
        })
    }

    /// Override the backend, mostly for tests
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Deadline applied to every repository call
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
