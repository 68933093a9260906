//! Store Object - Core database abstraction layer
//!
//! This crate provides the PostgreSQL field types and their filter
//! operators, the query builder, and the generic store over `sqlx`.

pub mod errors;
pub mod fields;
pub mod generic_store;
pub mod prelude;
pub mod query_builder;
pub mod traits;
pub mod validation;

pub use errors::StoreError;
pub use fields::{
    ArrayField, CidrField, InetField, JsonbField, MacAddrField, NetworkField, PgField, UuidField,
};
pub use generic_store::GenericStore;
pub use query_builder::{
    OperatorRegistry, QueryBuilder, QueryFilter, QueryOperator, RegistryError, SortOrder,
};
pub use traits::*;
pub use validation::{validate_table, ValidatedFieldName, ValidatedTableName, ValidationError};

pub use type_mapping::{
    ColumnType, FieldDef, IpNetwork, Ipv4Network, Ipv6Network, MacAddress, PostgresValue,
};

use sqlx::PgPool;

pub type DbPool = PgPool;
