//! Query filters
//!
//! Conditions, logical groups and the operator catalogue, including the
//! PostgreSQL array, network and JSONB operators.

use type_mapping::{ColumnType, PostgresValue};

/// Query condition operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperator {
    Eq,        // =
    Ne,        // !=
    Gt,        // >
    Gte,       // >=
    Lt,        // <
    Lte,       // <=
    Like,      // LIKE
    ILike,     // ILIKE (case insensitive)
    In,        // IN
    NotIn,     // NOT IN
    IsNull,    // IS NULL
    IsNotNull, // IS NOT NULL

    ArrayContains,    // @>
    ArrayContainedBy, // <@
    ArrayOverlap,     // &&

    ContainedBy,      // <<
    ContainedByEq,    // <<=
    ContainsSubnet,   // >>
    ContainsSubnetEq, // >>=
    ContainsOrEq,     // && (contains or is contained by)

    JsonbContains,    // @>
    JsonbContainedBy, // <@
    JsonbHasKey,      // ?
    JsonbHasAnyKeys,  // ?|
    JsonbHasAllKeys,  // ?&
}

impl QueryOperator {
    /// SQL operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "=",
            QueryOperator::Ne => "!=",
            QueryOperator::Gt => ">",
            QueryOperator::Gte => ">=",
            QueryOperator::Lt => "<",
            QueryOperator::Lte => "<=",
            QueryOperator::Like => "LIKE",
            QueryOperator::ILike => "ILIKE",
            QueryOperator::In => "IN",
            QueryOperator::NotIn => "NOT IN",
            QueryOperator::IsNull => "IS NULL",
            QueryOperator::IsNotNull => "IS NOT NULL",
            QueryOperator::ArrayContains | QueryOperator::JsonbContains => "@>",
            QueryOperator::ArrayContainedBy | QueryOperator::JsonbContainedBy => "<@",
            QueryOperator::ArrayOverlap | QueryOperator::ContainsOrEq => "&&",
            QueryOperator::ContainedBy => "<<",
            QueryOperator::ContainedByEq => "<<=",
            QueryOperator::ContainsSubnet => ">>",
            QueryOperator::ContainsSubnetEq => ">>=",
            QueryOperator::JsonbHasKey => "?",
            QueryOperator::JsonbHasAnyKeys => "?|",
            QueryOperator::JsonbHasAllKeys => "?&",
        }
    }

    pub fn takes_value(&self) -> bool {
        !matches!(self, QueryOperator::IsNull | QueryOperator::IsNotNull)
    }

    /// Whether the operator can be applied to a column of this type
    pub fn supports(&self, column: &ColumnType) -> bool {
        match self {
            QueryOperator::ArrayContains
            | QueryOperator::ArrayContainedBy
            | QueryOperator::ArrayOverlap => column.is_array(),
            QueryOperator::ContainedBy
            | QueryOperator::ContainedByEq
            | QueryOperator::ContainsSubnet
            | QueryOperator::ContainsSubnetEq
            | QueryOperator::ContainsOrEq => column.is_network(),
            QueryOperator::JsonbContains
            | QueryOperator::JsonbContainedBy
            | QueryOperator::JsonbHasKey
            | QueryOperator::JsonbHasAnyKeys
            | QueryOperator::JsonbHasAllKeys => column.is_jsonb(),
            QueryOperator::Like | QueryOperator::ILike => column.is_text(),
            _ => true,
        }
    }

    /// Column type the right-hand value is coerced to
    pub fn argument_type(&self, column: &ColumnType) -> Option<ColumnType> {
        match self {
            QueryOperator::IsNull | QueryOperator::IsNotNull => None,
            QueryOperator::Like | QueryOperator::ILike => Some(ColumnType::Text),
            QueryOperator::In | QueryOperator::NotIn => Some(ColumnType::array(column.clone())),
            // Containment ignores dimensions, so any depth is accepted
            QueryOperator::ArrayContains
            | QueryOperator::ArrayContainedBy
            | QueryOperator::ArrayOverlap => column
                .item_type()
                .map(|item| ColumnType::array(item.clone())),
            QueryOperator::ContainedBy
            | QueryOperator::ContainedByEq
            | QueryOperator::ContainsSubnet
            | QueryOperator::ContainsSubnetEq
            | QueryOperator::ContainsOrEq => Some(ColumnType::Inet),
            QueryOperator::JsonbContains | QueryOperator::JsonbContainedBy => {
                Some(ColumnType::Jsonb)
            }
            QueryOperator::JsonbHasKey => Some(ColumnType::Text),
            QueryOperator::JsonbHasAnyKeys | QueryOperator::JsonbHasAllKeys => {
                Some(ColumnType::array(ColumnType::Text))
            }
            _ => Some(column.clone()),
        }
    }

    /// Cast applied to the bound parameter, for IN this is the element cast
    pub fn param_cast(&self, column: &ColumnType) -> Option<String> {
        match self {
            QueryOperator::IsNull | QueryOperator::IsNotNull => None,
            QueryOperator::In | QueryOperator::NotIn => {
                needs_cast(column).then(|| column.cast_sql())
            }
            _ => self
                .argument_type(column)
                .filter(needs_cast)
                .map(|t| t.cast_sql()),
        }
    }
}

/// Types the driver cannot infer from a bare placeholder
fn needs_cast(column: &ColumnType) -> bool {
    matches!(
        column,
        ColumnType::Array { .. }
            | ColumnType::Cidr
            | ColumnType::Inet
            | ColumnType::Jsonb
            | ColumnType::MacAddr
            | ColumnType::Uuid
    )
}

/// Single condition in WHERE clause
#[derive(Debug, Clone)]
pub struct QueryCondition {
    pub field: String,
    pub operator: QueryOperator,
    pub value: Option<PostgresValue>, // None for IS NULL/IS NOT NULL
    pub cast: Option<String>,
}

/// Logical operators for combining conditions
#[derive(Debug, Clone)]
pub enum LogicalOperator {
    And,
    Or,
}

/// Query filter that can be nested
#[derive(Debug, Clone)]
pub enum QueryFilter {
    Condition(QueryCondition),
    Group {
        operator: LogicalOperator,
        filters: Vec<QueryFilter>,
    },
}

impl QueryFilter {
    /// Create a simple condition
    pub fn condition(field: &str, operator: QueryOperator, value: Option<PostgresValue>) -> Self {
        Self::Condition(QueryCondition {
            field: field.to_string(),
            operator,
            value,
            cast: None,
        })
    }

    /// Create a condition whose parameter is cast to `cast`
    pub fn cast_condition(
        field: &str,
        operator: QueryOperator,
        value: Option<PostgresValue>,
        cast: Option<String>,
    ) -> Self {
        Self::Condition(QueryCondition {
            field: field.to_string(),
            operator,
            value,
            cast,
        })
    }

    /// Create AND group
    pub fn and(filters: Vec<QueryFilter>) -> Self {
        Self::Group {
            operator: LogicalOperator::And,
            filters,
        }
    }

    /// Create OR group
    pub fn or(filters: Vec<QueryFilter>) -> Self {
        Self::Group {
            operator: LogicalOperator::Or,
            filters,
        }
    }

    /// Equal condition
    pub fn eq(field: &str, value: impl Into<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::Eq, Some(value.into()))
    }

    /// Not equal condition
    pub fn ne(field: &str, value: impl Into<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::Ne, Some(value.into()))
    }

    pub fn gt(field: &str, value: impl Into<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::Gt, Some(value.into()))
    }

    pub fn gte(field: &str, value: impl Into<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::Gte, Some(value.into()))
    }

    pub fn lt(field: &str, value: impl Into<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::Lt, Some(value.into()))
    }

    pub fn lte(field: &str, value: impl Into<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::Lte, Some(value.into()))
    }

    /// LIKE condition
    pub fn like(field: &str, pattern: &str) -> Self {
        Self::condition(field, QueryOperator::Like, Some(pattern.into()))
    }

    /// ILIKE condition (case insensitive)
    pub fn ilike(field: &str, pattern: &str) -> Self {
        Self::condition(field, QueryOperator::ILike, Some(pattern.into()))
    }

    /// IN condition
    pub fn in_values(field: &str, values: Vec<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::In, Some(PostgresValue::Array(values)))
    }

    /// NOT IN condition
    pub fn not_in_values(field: &str, values: Vec<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::NotIn, Some(PostgresValue::Array(values)))
    }

    /// IS NULL condition
    pub fn is_null(field: &str) -> Self {
        Self::condition(field, QueryOperator::IsNull, None)
    }

    /// IS NOT NULL condition
    pub fn is_not_null(field: &str) -> Self {
        Self::condition(field, QueryOperator::IsNotNull, None)
    }

    /// Array column contains every element of `values` (`@>`)
    pub fn array_contains(field: &str, values: impl Into<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::ArrayContains, Some(values.into()))
    }

    /// Every element of the array column is in `values` (`<@`)
    pub fn array_contained_by(field: &str, values: impl Into<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::ArrayContainedBy, Some(values.into()))
    }

    /// Array column shares at least one element with `values` (`&&`)
    pub fn array_overlap(field: &str, values: impl Into<PostgresValue>) -> Self {
        Self::condition(field, QueryOperator::ArrayOverlap, Some(values.into()))
    }
}
