//! JSONB columns
//!
//! Documents are stored with the native binary JSON type. Besides
//! equality, JSONB supports containment and top-level key tests.

use super::{impl_pg_field, PgField};
use crate::errors::StoreError;
use crate::query_builder::filter::{QueryFilter, QueryOperator};
use crate::query_builder::operators::{OperatorRegistry, RegistryError};
use type_mapping::{ColumnType, FieldDef, PostgresValue};

/// Lookup names registered by this module
pub const OPERATORS: &[(&str, QueryOperator)] = &[
    ("jsonb_contains", QueryOperator::JsonbContains),
    ("jsonb_contained_by", QueryOperator::JsonbContainedBy),
    ("jsonb_has_key", QueryOperator::JsonbHasKey),
    ("jsonb_has_any_keys", QueryOperator::JsonbHasAnyKeys),
    ("jsonb_has_all_keys", QueryOperator::JsonbHasAllKeys),
];

#[derive(Debug, Clone)]
pub struct JsonbField {
    definition: FieldDef,
}

impl JsonbField {
    pub fn new(name: &'static str) -> Self {
        Self {
            definition: FieldDef::new(name, ColumnType::Jsonb),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.definition = self.definition.nullable();
        self
    }

    /// `column @> document`
    pub fn jsonb_contains(&self, document: serde_json::Value) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::JsonbContains, PostgresValue::json(document))
    }

    /// `column <@ document`
    pub fn jsonb_contained_by(
        &self,
        document: serde_json::Value,
    ) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::JsonbContainedBy, PostgresValue::json(document))
    }

    /// `column ? key`: the key exists at the top level
    pub fn jsonb_has_key(&self, key: &str) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::JsonbHasKey, key)
    }

    /// `column ?| keys`
    pub fn jsonb_has_any_keys(&self, keys: &[&str]) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::JsonbHasAnyKeys, keys.to_vec())
    }

    /// `column ?& keys`
    pub fn jsonb_has_all_keys(&self, keys: &[&str]) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::JsonbHasAllKeys, keys.to_vec())
    }
}

impl_pg_field!(JsonbField);

pub fn register_operators(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    registry.register_all(OPERATORS)
}
