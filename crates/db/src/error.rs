/// Startup failures of the persistence layer. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Invalid database configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Failed to migrate database: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to seed data: {0}")]
    Seed(#[source] sqlx::Error),
}
