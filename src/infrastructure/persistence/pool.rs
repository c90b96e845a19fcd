//! PostgreSQL connection pool setup.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Baseline schema for `authors` and `posts`, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool using the configured limits and applies the
/// baseline schema.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the schema cannot be
/// applied.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to apply database schema")?;
    tracing::debug!("Database schema is up to date");

    Ok(pool)
}
