//! Trait definitions
//!
//! This module defines the table metadata trait models implement.

use crate::errors::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use type_mapping::{serialize_to_row, FieldDef, PostgresValue};

/// Metadata about database table structure.
///
/// Implemented by hand per model; the SQL helpers are derived from
/// `fields()`.
///
/// ```ignore
/// #[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
/// pub struct Host {
///     pub id: i32,
///     pub network: IpNetwork,
/// }
///
/// impl TableMetadata for Host {
///     fn table_name() -> &'static str {
///         "hosts"
///     }
///
///     fn fields() -> Vec<FieldDef> {
///         vec![
///             FieldDef::serial_primary_key("id"),
///             CidrField::new("network").into(),
///         ]
///     }
/// }
/// ```
pub trait TableMetadata:
    Clone
    + Send
    + Sync
    + Debug
    + Unpin
    + Serialize
    + for<'de> Deserialize<'de>
    + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>
{
    /// The table name in the database
    fn table_name() -> &'static str;

    /// Column definitions in table order
    fn fields() -> Vec<FieldDef>;

    /// Look up a column definition by name
    fn field(name: &str) -> Option<FieldDef> {
        Self::fields().into_iter().find(|f| f.name == name)
    }

    /// Generate CREATE TABLE SQL statement
    fn create_table_sql() -> String {
        let columns: Vec<String> = Self::fields().iter().map(FieldDef::ddl).collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            Self::table_name(),
            columns.join(", ")
        )
    }

    /// Generate DROP TABLE SQL statement
    fn drop_table_sql() -> String {
        format!("DROP TABLE IF EXISTS {}", Self::table_name())
    }

    /// SELECT list; multi-dimensional arrays are read back as JSONB
    fn select_columns() -> String {
        Self::fields()
            .iter()
            .map(|f| f.column_type.select_expr(f.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// SQL for SELECT base operation
    fn select_base_sql() -> String {
        format!("SELECT {} FROM {}", Self::select_columns(), Self::table_name())
    }

    /// SQL for COUNT base operation
    fn count_base_sql() -> String {
        format!("SELECT COUNT(*) as total FROM {}", Self::table_name())
    }

    /// Values for an INSERT, one per non-generated field
    fn insert_values(&self) -> Result<Vec<(FieldDef, PostgresValue)>, StoreError> {
        serialize_to_row(self, &Self::fields()).map_err(|e| StoreError::coercion(Self::table_name(), e))
    }
}
