use std::str::FromStr;

use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr, SqlxPostgresConnector};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseSetupError {
    #[error("Invalid DATABASE_URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to connect to database: {0}")]
    Connect(String),

    #[error("Migration failed: {0}")]
    Migration(#[from] DbErr),
}

/// Applies the access key as the connection password on top of the URL.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, DatabaseSetupError> {
    PgConnectOptions::from_str(&config.url)
        .map(|opts| opts.password(&config.access_key))
        .map_err(|e| DatabaseSetupError::InvalidUrl(e.to_string()))
}

#[cfg(not(tarpaulin_include))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DatabaseSetupError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.timeout)
        .connect_with(connect_options(config)?)
        .await
        .map_err(|e| DatabaseSetupError::Connect(e.to_string()))?;

    let conn = SqlxPostgresConnector::from_sqlx_postgres_pool(pool);

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None).await?;
    }

    Ok(conn)
}
