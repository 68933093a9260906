//! Generic store implementations
//!
//! This module provides generic database store functionality.

use super::core::GenericStore;
use crate::errors::StoreError;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::query_builder::QueryBuilder;
use crate::traits::{StoreObject, TableMetadata};
use async_trait::async_trait;
use sqlx::Row;
use type_mapping::PostgresValue;

/// Append non-empty clauses to a base statement
fn append_clauses(base_sql: &str, clauses: &[&str]) -> String {
    let mut full_sql =
        String::with_capacity(base_sql.len() + clauses.iter().map(|c| c.len() + 1).sum::<usize>());
    full_sql.push_str(base_sql);
    for clause in clauses.iter().filter(|c| !c.is_empty()) {
        full_sql.push(' ');
        full_sql.push_str(clause);
    }
    full_sql
}

#[async_trait]
impl<T> StoreObject for GenericStore<T>
where
    T: TableMetadata,
{
    type Model = T;

    async fn create(&self, data: Self::Model) -> Result<Self::Model, StoreError> {
        let row = data.insert_values()?;

        let mut params = Vec::with_capacity(row.len());
        let mut param_counter = 1;
        let mut columns = Vec::with_capacity(row.len());
        let mut exprs = Vec::with_capacity(row.len());
        for (field, value) in &row {
            columns.push(field.name);
            exprs.push(SqlGenerator::insert_expr(
                value,
                &field.column_type,
                &mut params,
                &mut param_counter,
            ));
        }

        let sql = if columns.is_empty() {
            format!(
                "INSERT INTO {} DEFAULT VALUES RETURNING {}",
                T::table_name(),
                T::select_columns()
            )
        } else {
            format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
                T::table_name(),
                columns.join(", "),
                exprs.join(", "),
                T::select_columns()
            )
        };
        tracing::debug!(table = T::table_name(), params = params.len(), "create: {}", sql);

        let mut sqlx_query = sqlx::query_as::<_, T>(&sql);
        for param in params {
            sqlx_query = self.bind_param(sqlx_query, param);
        }

        sqlx_query
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreError::query_execution(T::table_name(), &sql, e))
    }

    async fn list_all(&self) -> Result<Vec<Self::Model>, StoreError> {
        let sql = T::select_base_sql();
        let results = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "list_all", e))?;
        Ok(results)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let result = sqlx::query(&T::count_base_sql())
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "count", e))?;

        let total: i64 = result
            .try_get("total")
            .map_err(|e| StoreError::database_operation(T::table_name(), "count", e))?;
        Ok(total)
    }

    async fn find(&self, query: QueryBuilder) -> Result<Vec<Self::Model>, StoreError> {
        let (where_clause, order_clause, limit_clause, params) = query.build();
        let full_sql = append_clauses(
            &T::select_base_sql(),
            &[&where_clause, &order_clause, &limit_clause],
        );
        tracing::debug!(table = T::table_name(), params = params.len(), "find: {}", full_sql);

        let mut sqlx_query = sqlx::query_as::<_, T>(&full_sql);
        for param in params {
            sqlx_query = self.bind_param(sqlx_query, param);
        }

        let results = sqlx_query
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::query_execution(T::table_name(), &full_sql, e))?;

        Ok(results)
    }

    async fn find_one(&self, query: QueryBuilder) -> Result<Option<Self::Model>, StoreError> {
        let query_with_limit = query.limit(1);
        let mut results = self.find(query_with_limit).await?;

        Ok(results.pop())
    }

    async fn count_where(&self, query: QueryBuilder) -> Result<i64, StoreError> {
        let (where_clause, _, _, params) = query.build(); // No ORDER BY or LIMIT for COUNT
        let full_sql = append_clauses(&T::count_base_sql(), &[&where_clause]);
        tracing::debug!(table = T::table_name(), params = params.len(), "count_where: {}", full_sql);

        let mut sqlx_query = sqlx::query(&full_sql);
        for param in params {
            sqlx_query = self.bind_param_raw(sqlx_query, param);
        }

        let result = sqlx_query
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreError::query_execution(T::table_name(), &full_sql, e))?;

        let total: i64 = result
            .try_get("total")
            .map_err(|e| StoreError::database_operation(T::table_name(), "count_where", e))?;
        Ok(total)
    }

    async fn delete_where(&self, query: QueryBuilder) -> Result<u64, StoreError> {
        if !query.has_conditions() {
            return Err(StoreError::InvalidQuery(format!(
                "refusing to delete from {} without conditions",
                T::table_name()
            )));
        }

        let (where_clause, _, _, params) = query.build();
        let full_sql = append_clauses(&format!("DELETE FROM {}", T::table_name()), &[&where_clause]);
        tracing::debug!(table = T::table_name(), params = params.len(), "delete_where: {}", full_sql);

        let mut sqlx_query = sqlx::query(&full_sql);
        for param in params {
            sqlx_query = self.bind_param_raw(sqlx_query, param);
        }

        let result = sqlx_query
            .execute(&self.db_pool)
            .await
            .map_err(|e| StoreError::query_execution(T::table_name(), &full_sql, e))?;

        Ok(result.rows_affected())
    }
}

// Macro for the shared parameter binding logic
macro_rules! bind_value {
    ($query:expr, $param:expr) => {
        match $param {
            PostgresValue::Text(s) => $query.bind(s),
            PostgresValue::SmallInt(i) => $query.bind(i),
            PostgresValue::Integer(i) => $query.bind(i),
            PostgresValue::BigInt(i) => $query.bind(i),
            PostgresValue::Float(f) => $query.bind(f),
            PostgresValue::Boolean(b) => $query.bind(b),
            PostgresValue::Uuid(u) => $query.bind(u),
            PostgresValue::Timestamp(dt) => $query.bind(dt),
            PostgresValue::Date(d) => $query.bind(d),
            PostgresValue::Json(doc) => $query.bind(doc),
            PostgresValue::Network(net) => $query.bind(net),
            PostgresValue::MacAddr(mac) => $query.bind(mac),
            // Arrays are expanded into ARRAY[...] by the SQL generator
            array @ PostgresValue::Array(_) => $query.bind(array.to_json()),
            PostgresValue::Null => $query.bind(Option::<String>::None),
        }
    };
}

// Helper implementation for parameter binding
impl<T: TableMetadata> GenericStore<T> {
    fn bind_param<'q>(
        &self,
        query: sqlx::query::QueryAs<'q, sqlx::Postgres, T, sqlx::postgres::PgArguments>,
        param: PostgresValue,
    ) -> sqlx::query::QueryAs<'q, sqlx::Postgres, T, sqlx::postgres::PgArguments> {
        bind_value!(query, param)
    }

    fn bind_param_raw<'q>(
        &self,
        query: sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>,
        param: PostgresValue,
    ) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
        bind_value!(query, param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_clauses_skips_empty() {
        assert_eq!(
            append_clauses("SELECT id FROM t", &["WHERE id = $1", "", "LIMIT 1"]),
            "SELECT id FROM t WHERE id = $1 LIMIT 1"
        );
        assert_eq!(append_clauses("SELECT COUNT(*) as total FROM t", &[""]), "SELECT COUNT(*) as total FROM t");
    }
}
