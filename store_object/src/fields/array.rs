//! ARRAY columns
//!
//! `item[]` columns with optional fixed dimensions and the containment
//! and overlap operators.

use super::{impl_pg_field, PgField};
use crate::errors::StoreError;
use crate::query_builder::filter::{QueryFilter, QueryOperator};
use crate::query_builder::operators::{OperatorRegistry, RegistryError};
use type_mapping::{ColumnType, FieldDef, PostgresValue};

/// Lookup names registered by this module
pub const OPERATORS: &[(&str, QueryOperator)] = &[
    ("array_contains", QueryOperator::ArrayContains),
    ("array_contained_by", QueryOperator::ArrayContainedBy),
    ("array_overlap", QueryOperator::ArrayOverlap),
];

#[derive(Debug, Clone)]
pub struct ArrayField {
    definition: FieldDef,
}

impl ArrayField {
    /// One-dimensional array of `item`
    pub fn new(name: &'static str, item: ColumnType) -> Self {
        Self {
            definition: FieldDef::new(name, ColumnType::array(item)),
        }
    }

    /// Declare a fixed number of dimensions, e.g. 2 for `INTEGER[][]`
    pub fn dimensions(mut self, dimensions: u32) -> Self {
        if let ColumnType::Array { dimensions: d, .. } = &mut self.definition.column_type {
            *d = Some(dimensions);
        }
        self
    }

    pub fn nullable(mut self) -> Self {
        self.definition = self.definition.nullable();
        self
    }

    pub fn item_type(&self) -> Option<&ColumnType> {
        self.definition.column_type.item_type()
    }

    /// `column @> ARRAY[...]`: the column holds every given element
    pub fn array_contains(&self, values: impl Into<PostgresValue>) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::ArrayContains, values)
    }

    /// `column <@ ARRAY[...]`: every element of the column is among the given ones
    pub fn array_contained_by(
        &self,
        values: impl Into<PostgresValue>,
    ) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::ArrayContainedBy, values)
    }

    /// `column && ARRAY[...]`: at least one element in common
    pub fn array_overlap(&self, values: impl Into<PostgresValue>) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::ArrayOverlap, values)
    }
}

impl_pg_field!(ArrayField);

pub fn register_operators(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    registry.register_all(OPERATORS)
}
