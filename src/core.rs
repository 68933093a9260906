//! Core pgext functionality
//!
//! This module contains the `PgExt` handle that owns the connection pool
//! and hands out typed stores.

use sqlx::PgPool;
use std::time::Duration;
use store_object::{GenericStore, TableMetadata};

use crate::errors::PgExtError;
use config::{AppConfig, DatabaseConfig};

/// Owns the database pool shared by every store
#[derive(Debug, Clone)]
pub struct PgExt {
    pool: PgPool,
}

impl PgExt {
    /// Create a new handle with a pool built from `config`
    pub async fn new(config: DatabaseConfig) -> Result<Self, PgExtError> {
        config.validate()?;
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;
        tracing::info!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "connected to PostgreSQL"
        );

        Ok(Self { pool })
    }

    /// Create a handle from the configuration file, see `AppConfig::load`
    pub async fn from_config_file() -> Result<Self, PgExtError> {
        let config = AppConfig::load()?;
        Self::new(config.database).await
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Store for model `T` sharing this handle's pool
    pub fn store<T: TableMetadata>(&self) -> GenericStore<T> {
        GenericStore::new(self.pool.clone())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), PgExtError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
