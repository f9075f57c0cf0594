//! Persistence layer: connection pool, migrations, seed data, models and
//! repositories for the family budget schema.

use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::Connection;

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use config::DatabaseConfig;
pub use error::DbError;
pub use seed::seed_data;

pub type DbPool = sqlx::PgPool;

/// Open a connection pool and verify that a session can be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DbPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options())
        .await
        .map_err(DbError::Connection)?;

    health_check(&pool).await.map_err(DbError::Connection)?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        max_connections = config.max_connections,
        "Database connected"
    );
    Ok(pool)
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Round-trip a trivial query through the pool.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Reachability of the database as reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    /// A pooled connection was obtained and answered a ping.
    Connected,
    /// A connection was obtained but the ping failed.
    Disconnected,
    /// No connection could be obtained from the pool.
    Error,
}

impl DatabaseStatus {
    pub fn is_healthy(self) -> bool {
        self == Self::Connected
    }
}

/// Check database liveness by acquiring a pooled connection and pinging it.
pub async fn probe(pool: &DbPool) -> DatabaseStatus {
    let mut conn = match pool.acquire().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!(error = %e, "Could not acquire database connection");
            return DatabaseStatus::Error;
        }
    };

    match conn.ping().await {
        Ok(()) => DatabaseStatus::Connected,
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            DatabaseStatus::Disconnected
        }
    }
}
