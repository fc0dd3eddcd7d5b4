//! Application configuration management.

use serde::Deserialize;

use crate::error::AppError;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Apply pending migrations before serving.
    #[serde(default = "default_true")]
    pub run_migrations: bool,
    /// Insert the sample dataset when the store has no clients.
    #[serde(default = "default_true")]
    pub seed_on_empty: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            run_migrations: true,
            seed_on_empty: true,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

/// Database configuration.
///
/// Either a full `url` or the individual connection parts may be given.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: Option<String>,
    /// Database host, used when no URL is configured.
    pub host: Option<String>,
    /// Database port.
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// Database name.
    pub name: Option<String>,
    /// Database user.
    pub user: Option<String>,
    /// Database password.
    pub password: Option<String>,
    /// Require TLS when connecting from parts.
    #[serde(default)]
    pub require_ssl: bool,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Log every SQL statement.
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: None,
            port: default_db_port(),
            name: None,
            user: None,
            password: None,
            require_ssl: false,
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            sqlx_logging: false,
        }
    }
}

fn default_db_port() -> u16 {
    5432
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

impl DatabaseConfig {
    /// Resolves the connection URL.
    ///
    /// Precedence: configured `url`, then the `DATABASE_URL` environment
    /// variable, then a URL assembled from `host`/`port`/`name`/`user`/`password`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if none of the sources is complete.
    pub fn connection_url(&self) -> Result<String, AppError> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Ok(url.to_string());
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                return Ok(url);
            }
        }

        self.url_from_parts()
    }

    fn url_from_parts(&self) -> Result<String, AppError> {
        let (Some(host), Some(name), Some(user)) = (
            self.host.as_deref(),
            self.name.as_deref(),
            self.user.as_deref(),
        ) else {
            return Err(AppError::Configuration(
                "database url or host/name/user must be set".to_string(),
            ));
        };

        let credentials = match self.password.as_deref() {
            Some(password) => format!("{}:{}", encode_userinfo(user), encode_userinfo(password)),
            None => encode_userinfo(user),
        };
        let mut url = format!("postgres://{credentials}@{host}:{}/{name}", self.port);
        if self.require_ssl {
            url.push_str("?sslmode=require");
        }
        Ok(url)
    }
}

/// Percent-encodes the characters that would break the userinfo part of a URL.
fn encode_userinfo(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            ':' | '@' | '/' | '?' | '#' | '%' | '[' | ']' | ' ' => {
                encoded.push_str(&format!("%{:02X}", c as u32));
            }
            _ => encoded.push(c),
        }
    }
    encoded
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RETAIL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
