//! Convenience re-exports for common pgext usage
//!
//! # Example
//!
//! ```rust
//! use pgext::prelude::*;
//!
//! let network = CidrField::new("network");
//! let filter = network.contains_subnet("192.168.1.5").unwrap();
//! # let _ = filter;
//! ```

// Core components
pub use crate::core::PgExt;
pub use crate::errors::PgExtError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Re-export commonly used store-object types for convenience
pub use store_object::prelude::*;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::types::Json;
pub use sqlx::{FromRow, PgPool, Row};
