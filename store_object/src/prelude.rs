//! Convenience re-exports for common store-object usage

// Core traits
pub use crate::traits::{StoreObject, TableMetadata};

// Field types and their operators
pub use crate::fields::{
    ArrayField, CidrField, InetField, JsonbField, MacAddrField, NetworkField, PgField, UuidField,
};

// Error types
pub use crate::errors::StoreError;

// Core store functionality
pub use crate::generic_store::GenericStore;

// Query building
pub use crate::query_builder::{QueryBuilder, QueryFilter, QueryOperator, SortOrder};

// Column types and values
pub use type_mapping::{ColumnType, FieldDef, IpNetwork, MacAddress, PostgresValue};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
pub use uuid::Uuid;
