//! SQL generation
//!
//! Renders filters, ordering and value expressions with `$n` placeholders,
//! collecting the bound values in placeholder order.

use crate::query_builder::filter::{LogicalOperator, QueryCondition, QueryFilter, QueryOperator};
use crate::query_builder::ordering::SortOrder;
use type_mapping::{ColumnType, PostgresValue};

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build WHERE clause from conditions
    pub fn build_where_clause(conditions: &[QueryFilter]) -> (String, Vec<PostgresValue>) {
        let mut param_counter = 1;
        Self::build_where_clause_from(conditions, &mut param_counter)
    }

    /// Build WHERE clause continuing an existing placeholder sequence
    pub fn build_where_clause_from(
        conditions: &[QueryFilter],
        param_counter: &mut usize,
    ) -> (String, Vec<PostgresValue>) {
        if conditions.is_empty() {
            return ("".to_string(), Vec::new());
        }

        let mut values = Vec::new();

        let conditions_sql = conditions
            .iter()
            .map(|condition| Self::build_condition_sql(condition, &mut values, param_counter))
            .collect::<Vec<_>>()
            .join(" AND ");

        if conditions_sql.is_empty() {
            ("".to_string(), values)
        } else {
            (format!("WHERE {}", conditions_sql), values)
        }
    }

    fn build_condition_sql(
        filter: &QueryFilter,
        values: &mut Vec<PostgresValue>,
        param_counter: &mut usize,
    ) -> String {
        match filter {
            QueryFilter::Condition(condition) => {
                Self::build_single_condition_sql(condition, values, param_counter)
            }
            QueryFilter::Group { operator, filters } => {
                if filters.is_empty() {
                    // Empty AND is true, empty OR is false
                    return match operator {
                        LogicalOperator::And => "1=1".to_string(),
                        LogicalOperator::Or => "1=0".to_string(),
                    };
                }

                let operator_str = match operator {
                    LogicalOperator::And => " AND ",
                    LogicalOperator::Or => " OR ",
                };

                let group_conditions = filters
                    .iter()
                    .map(|f| Self::build_condition_sql(f, values, param_counter))
                    .collect::<Vec<_>>()
                    .join(operator_str);

                format!("({})", group_conditions)
            }
        }
    }

    fn build_single_condition_sql(
        condition: &QueryCondition,
        values: &mut Vec<PostgresValue>,
        param_counter: &mut usize,
    ) -> String {
        let field = &condition.field;
        let cast = condition.cast.as_deref();
        let operator = condition.operator;

        match operator {
            QueryOperator::IsNull | QueryOperator::IsNotNull => {
                format!("{} {}", field, operator.symbol())
            }
            QueryOperator::Eq | QueryOperator::Ne => match &condition.value {
                Some(value) if !value.is_null() => {
                    let rendered = Self::render_value(value, cast, values, param_counter);
                    format!("{} {} {}", field, operator.symbol(), rendered)
                }
                _ if operator == QueryOperator::Eq => format!("{} IS NULL", field),
                _ => format!("{} IS NOT NULL", field),
            },
            QueryOperator::In | QueryOperator::NotIn => {
                let (empty_sql, keyword) = if operator == QueryOperator::In {
                    ("1=0", "IN") // Empty IN clause
                } else {
                    ("1=1", "NOT IN") // Empty NOT IN clause
                };

                match &condition.value {
                    Some(PostgresValue::Array(array_values)) if !array_values.is_empty() => {
                        let placeholders: Vec<String> = array_values
                            .iter()
                            .map(|v| Self::render_value(v, cast, values, param_counter))
                            .collect();
                        format!("{} {} ({})", field, keyword, placeholders.join(", "))
                    }
                    _ => empty_sql.to_string(),
                }
            }
            QueryOperator::ArrayOverlap if cast.is_none() => match &condition.value {
                // Nothing overlaps an empty array
                Some(PostgresValue::Array(items)) if items.is_empty() => "1=0".to_string(),
                Some(value) => {
                    let rendered = Self::render_value(value, cast, values, param_counter);
                    format!("{} && {}", field, rendered)
                }
                None => "1=0".to_string(),
            },
            _ => match &condition.value {
                Some(value) if !value.is_null() => {
                    let rendered = Self::render_value(value, cast, values, param_counter);
                    format!("{} {} {}", field, operator.symbol(), rendered)
                }
                _ => "1=0".to_string(), // Invalid condition
            },
        }
    }

    /// Render a value as a placeholder or an ARRAY constructor.
    /// Array elements are bound one by one; only scalars reach `values`.
    pub fn render_value(
        value: &PostgresValue,
        cast: Option<&str>,
        values: &mut Vec<PostgresValue>,
        param_counter: &mut usize,
    ) -> String {
        match value {
            PostgresValue::Array(items) => {
                let body = Self::render_array(items, cast, values, param_counter);
                match cast {
                    Some(cast) => format!("{}::{}", body, cast),
                    None => body,
                }
            }
            scalar => {
                values.push(scalar.clone());
                let param = format!("${}", param_counter);
                *param_counter += 1;
                match cast {
                    Some(cast) => format!("{}::{}", param, cast),
                    None => param,
                }
            }
        }
    }

    fn render_array(
        items: &[PostgresValue],
        cast: Option<&str>,
        values: &mut Vec<PostgresValue>,
        param_counter: &mut usize,
    ) -> String {
        if items.is_empty() {
            // An untyped literal takes the type of the other operand
            return match cast {
                Some(_) => "ARRAY[]".to_string(),
                None => "'{}'".to_string(),
            };
        }

        let elements: Vec<String> = items
            .iter()
            .map(|item| match item {
                PostgresValue::Array(inner) if inner.is_empty() => match cast {
                    Some(cast) => format!("ARRAY[]::{}", cast),
                    None => "'{}'".to_string(),
                },
                PostgresValue::Array(inner) => {
                    Self::render_array(inner, cast, values, param_counter)
                }
                scalar => Self::render_value(scalar, None, values, param_counter),
            })
            .collect();

        format!("ARRAY[{}]", elements.join(", "))
    }

    /// Value expression for an INSERT column, always cast to the column type
    pub fn insert_expr(
        value: &PostgresValue,
        column_type: &ColumnType,
        values: &mut Vec<PostgresValue>,
        param_counter: &mut usize,
    ) -> String {
        let cast = column_type.cast_sql();
        if value.is_null() {
            return format!("NULL::{}", cast);
        }
        Self::render_value(value, Some(&cast), values, param_counter)
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(order_by: &[(String, SortOrder)]) -> String {
        if order_by.is_empty() {
            return "".to_string();
        }

        let order_items: Vec<String> = order_by
            .iter()
            .map(|(field, order)| format!("{} {}", field, order.to_sql()))
            .collect();

        format!("ORDER BY {}", order_items.join(", "))
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_limit_clause(limit: Option<i64>, offset: Option<i64>) -> String {
        let mut clauses = Vec::new();

        if let Some(limit) = limit {
            clauses.push(format!("LIMIT {}", limit));
        }

        if let Some(offset) = offset {
            clauses.push(format!("OFFSET {}", offset));
        }

        clauses.join(" ")
    }
}
