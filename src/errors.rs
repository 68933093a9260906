//! Error types for the pgext crate
//!
//! This module contains all error types that can be returned by `PgExt` operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgExtError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Store error: {0}")]
    Store(#[from] store_object::StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] store_object::ValidationError),
}
