use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

use crate::error::DbError;

/// Database connection settings loaded from environment variables.
///
/// Every field has a default suitable for local development, so the server
/// starts against a stock local PostgreSQL without any configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    /// Session time zone applied to every pooled connection.
    pub timezone: String,
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Connections older than this are closed and replaced.
    pub max_lifetime: Duration,
    /// How long a request waits for a free connection before failing.
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var       | Default         |
    /// |---------------|-----------------|
    /// | `DB_HOST`     | `localhost`     |
    /// | `DB_PORT`     | `5432`          |
    /// | `DB_NAME`     | `family_budget` |
    /// | `DB_USER`     | `app_user`      |
    /// | `DB_PASSWORD` | `app_password`  |
    /// | `DB_TIMEZONE` | `Asia/Tokyo`    |
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port_raw = var("DB_PORT", "5432");
        let port: u16 = port_raw.parse().map_err(|_| {
            DbError::InvalidConfig(format!("DB_PORT must be a valid u16, got '{port_raw}'"))
        })?;

        Ok(Self {
            host: var("DB_HOST", "localhost"),
            port,
            name: var("DB_NAME", "family_budget"),
            user: var("DB_USER", "app_user"),
            password: var("DB_PASSWORD", "app_password"),
            timezone: var("DB_TIMEZONE", "Asia/Tokyo"),
            max_connections: 100,
            min_connections: 10,
            max_lifetime: Duration::from_secs(60 * 60),
            acquire_timeout: Duration::from_secs(30),
        })
    }

    /// Connection options for the configured server.
    ///
    /// The driver always negotiates UTF-8 client encoding; the session time
    /// zone is passed as a startup option.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
            .options([("TimeZone", self.timezone.as_str())])
    }
}
