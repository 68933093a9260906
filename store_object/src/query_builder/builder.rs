//! Query builder
//!
//! Collects filters, ordering and paging, and renders the clauses.

use crate::errors::StoreError;
use crate::query_builder::filter::QueryFilter;
use crate::query_builder::lookup::resolve_lookup;
use crate::query_builder::operators::OperatorRegistry;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::traits::TableMetadata;
use type_mapping::{FieldDef, PostgresValue};

/// Query builder for constructing complex database queries
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) limit: Option<i64>,
    pub(crate) offset: Option<i64>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn filters(mut self, filters: Vec<QueryFilter>) -> Self {
        self.conditions.extend(filters);
        self
    }

    /// Add a filter from a lookup key such as `data__array_contains`,
    /// resolved against `T`'s fields and the shared operator registry
    pub fn lookup<T: TableMetadata>(
        self,
        key: &str,
        value: impl Into<PostgresValue>,
    ) -> Result<Self, StoreError> {
        let fields = T::fields();
        self.lookup_with(OperatorRegistry::global(), T::table_name(), &fields, key, value)
    }

    /// Add a filter from a lookup key with an explicit registry and field set
    pub fn lookup_with(
        self,
        registry: &OperatorRegistry,
        table: &str,
        fields: &[FieldDef],
        key: &str,
        value: impl Into<PostgresValue>,
    ) -> Result<Self, StoreError> {
        let filter = resolve_lookup(registry, table, fields, key, value.into())?;
        Ok(self.filter(filter))
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    /// Add ordering from a key, `-field` for descending
    pub fn order_by_key(self, key: &str) -> Self {
        let (field, order) = SortOrder::parse_key(key);
        self.order_by(field, order)
    }

    /// Add limit
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add offset
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Build WHERE clause
    pub fn build_where_clause(&self) -> (String, Vec<PostgresValue>) {
        SqlGenerator::build_where_clause(&self.conditions)
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(&self) -> String {
        SqlGenerator::build_order_clause(&self.order_by)
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_limit_clause(&self) -> String {
        SqlGenerator::build_limit_clause(self.limit, self.offset)
    }

    /// Build complete query parts (WHERE, ORDER BY, LIMIT, Values)
    pub fn build(&self) -> (String, String, String, Vec<PostgresValue>) {
        let (where_clause, values) = self.build_where_clause();
        let order_clause = self.build_order_clause();
        let limit_clause = self.build_limit_clause();

        (where_clause, order_clause, limit_clause, values)
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
