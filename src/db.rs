//! Database connection and pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

/// Database startup error.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to connect to database: {0}")]
    Connection(String),

    #[error("Failed to run migrations: {0}")]
    Migration(String),
}

/// Create a database connection pool.
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(600))
        .connect(url)
        .await
        .map_err(|e| DbError::Connection(e.to_string()))?;

    tracing::info!("database connection pool created");

    Ok(pool)
}

/// Run database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration(e.to_string()))?;

    tracing::info!("database migrations completed");

    Ok(())
}
