//! PostgreSQL field types
//!
//! Each module pairs a native column type with the filter operators that
//! apply to it and registers their lookup names with an `OperatorRegistry`.

pub mod array;
pub mod cidr;
pub mod inet;
pub mod jsonb;
pub mod macaddr;
pub mod network;
pub mod uuid;

pub use array::ArrayField;
pub use cidr::CidrField;
pub use inet::InetField;
pub use jsonb::JsonbField;
pub use macaddr::MacAddrField;
pub use network::NetworkField;
pub use uuid::UuidField;

use crate::errors::StoreError;
use crate::query_builder::filter::{QueryFilter, QueryOperator};
use crate::query_builder::lookup::build_filter;
use crate::query_builder::operators::{OperatorRegistry, RegistryError};
use type_mapping::{ColumnType, FieldDef, PostgresValue};

/// A typed column usable in model definitions and filters
pub trait PgField {
    /// Column definition used for DDL and coercion
    fn definition(&self) -> &FieldDef;

    fn name(&self) -> &'static str {
        self.definition().name
    }

    fn column_type(&self) -> &ColumnType {
        &self.definition().column_type
    }

    /// Coerce a value to this column, honouring nullability
    fn coerce(&self, value: impl Into<PostgresValue>) -> Result<PostgresValue, StoreError>
    where
        Self: Sized,
    {
        let definition = self.definition();
        definition
            .coerce(value.into())
            .map_err(|e| StoreError::coercion(definition.name, e))
    }

    /// Condition on this column with any operator it supports
    fn filter(
        &self,
        operator: QueryOperator,
        value: impl Into<PostgresValue>,
    ) -> Result<QueryFilter, StoreError>
    where
        Self: Sized,
    {
        build_filter(self.definition(), operator, value.into())
    }

    fn eq(&self, value: impl Into<PostgresValue>) -> Result<QueryFilter, StoreError>
    where
        Self: Sized,
    {
        self.filter(QueryOperator::Eq, value)
    }

    fn ne(&self, value: impl Into<PostgresValue>) -> Result<QueryFilter, StoreError>
    where
        Self: Sized,
    {
        self.filter(QueryOperator::Ne, value)
    }

    fn in_values(&self, values: Vec<PostgresValue>) -> Result<QueryFilter, StoreError>
    where
        Self: Sized,
    {
        self.filter(QueryOperator::In, PostgresValue::Array(values))
    }

    fn is_null(&self) -> QueryFilter {
        QueryFilter::is_null(self.name())
    }

    fn is_not_null(&self) -> QueryFilter {
        QueryFilter::is_not_null(self.name())
    }
}

/// Implements `PgField` and the conversion into `FieldDef` for a field type
/// holding its definition in `self.definition`
macro_rules! impl_pg_field {
    ($field:ty) => {
        impl $crate::fields::PgField for $field {
            fn definition(&self) -> &type_mapping::FieldDef {
                &self.definition
            }
        }

        impl From<$field> for type_mapping::FieldDef {
            fn from(field: $field) -> Self {
                field.definition
            }
        }
    };
}

pub(crate) use impl_pg_field;

/// Register the lookup names of every field module
pub fn register_all(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    array::register_operators(registry)?;
    // cidr and inet share the network names
    network::register_operators(registry)?;
    jsonb::register_operators(registry)?;
    Ok(())
}
