//! # pgext
//!
//! PostgreSQL-specific column types for Rust models: ARRAY, CIDR, INET,
//! JSONB, MACADDR and UUID, together with the filter operators each type
//! supports (`@>`, `<@`, `&&`, `<<`, `<<=`, `>>`, `>>=`, `?`, `?|`, `?&`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pgext::prelude::*;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
//! pub struct Host {
//!     pub id: i32,
//!     pub network: IpNetwork,
//!     pub tags: Vec<String>,
//! }
//!
//! impl TableMetadata for Host {
//!     fn table_name() -> &'static str {
//!         "hosts"
//!     }
//!
//!     fn fields() -> Vec<FieldDef> {
//!         vec![
//!             FieldDef::serial_primary_key("id"),
//!             CidrField::new("network").into(),
//!             ArrayField::new("tags", ColumnType::Text).into(),
//!         ]
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "pgext".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let db = PgExt::new(config).await?;
//!     db.create_table::<Host>(true).await?;
//!
//!     let hosts = db.store::<Host>();
//!     hosts
//!         .create(Host {
//!             id: 0,
//!             network: "192.168.1.0/24".parse()?,
//!             tags: vec!["lab".to_string()],
//!         })
//!         .await?;
//!
//!     let query = QueryBuilder::new().lookup::<Host>("network__contains_subnet", "192.168.1.5")?;
//!     let found = hosts.find(query).await?;
//!     println!("Found {} hosts", found.len());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::PgExt;
pub use errors::PgExtError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Re-export internal crates used by the public API
pub use store_object;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use sqlx;
pub use async_trait;
