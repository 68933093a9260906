//! Native PostgreSQL column types
//!
//! This module describes the column types a field can be declared with
//! and how each one is rendered in DDL and SELECT lists.

use serde::{Deserialize, Serialize};

/// Native column type of a PostgreSQL field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Serial,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Boolean,
    Text,
    Varchar(Option<u32>),
    Timestamp,
    Date,
    /// `item[]`, one pair of brackets per dimension (defaults to one)
    Array {
        item: Box<ColumnType>,
        dimensions: Option<u32>,
    },
    Cidr,
    Inet,
    Jsonb,
    MacAddr,
    Uuid,
}

impl ColumnType {
    /// Array of `item` with an unspecified number of dimensions
    pub fn array(item: ColumnType) -> Self {
        ColumnType::Array {
            item: Box::new(item),
            dimensions: None,
        }
    }

    /// Array of `item` with a fixed number of dimensions
    pub fn array_with_dimensions(item: ColumnType, dimensions: u32) -> Self {
        ColumnType::Array {
            item: Box::new(item),
            dimensions: Some(dimensions),
        }
    }

    /// Render the type as used in CREATE TABLE and casts
    pub fn sql(&self) -> String {
        match self {
            ColumnType::Serial => "SERIAL".to_string(),
            ColumnType::SmallInt => "SMALLINT".to_string(),
            ColumnType::Integer => "INTEGER".to_string(),
            ColumnType::BigInt => "BIGINT".to_string(),
            ColumnType::Real => "REAL".to_string(),
            ColumnType::Double => "DOUBLE PRECISION".to_string(),
            ColumnType::Boolean => "BOOLEAN".to_string(),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::Varchar(Some(len)) => format!("VARCHAR({})", len),
            ColumnType::Varchar(None) => "VARCHAR".to_string(),
            ColumnType::Timestamp => "TIMESTAMP WITH TIME ZONE".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Array { item, dimensions } => {
                // SERIAL is not a real type and cannot be an element type
                let item_sql = match item.as_ref() {
                    ColumnType::Serial => "INTEGER".to_string(),
                    other => other.sql(),
                };
                let brackets = "[]".repeat(dimensions.unwrap_or(1).max(1) as usize);
                format!("{}{}", item_sql, brackets)
            }
            ColumnType::Cidr => "CIDR".to_string(),
            ColumnType::Inet => "INET".to_string(),
            ColumnType::Jsonb => "JSONB".to_string(),
            ColumnType::MacAddr => "MACADDR".to_string(),
            ColumnType::Uuid => "UUID".to_string(),
        }
    }

    /// Type name usable in a `::` cast (SERIAL is only valid in DDL)
    pub fn cast_sql(&self) -> String {
        match self {
            ColumnType::Serial => "INTEGER".to_string(),
            other => other.sql(),
        }
    }

    /// Expression used to read the column in a SELECT list.
    ///
    /// The driver only decodes one-dimensional arrays, so arrays declared
    /// with more dimensions are read back as JSONB.
    pub fn select_expr(&self, column: &str) -> String {
        match self {
            ColumnType::Array {
                dimensions: Some(d),
                ..
            } if *d > 1 => format!("to_jsonb({}) AS {}", column, column),
            _ => column.to_string(),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ColumnType::Array { .. })
    }

    /// CIDR and INET share the subnet operators
    pub fn is_network(&self) -> bool {
        matches!(self, ColumnType::Cidr | ColumnType::Inet)
    }

    pub fn is_jsonb(&self) -> bool {
        matches!(self, ColumnType::Jsonb)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ColumnType::Text | ColumnType::Varchar(_))
    }

    /// Element type of an array column
    pub fn item_type(&self) -> Option<&ColumnType> {
        match self {
            ColumnType::Array { item, .. } => Some(item),
            _ => None,
        }
    }

    /// Declared number of dimensions of an array column
    pub fn dimensions(&self) -> Option<u32> {
        match self {
            ColumnType::Array { dimensions, .. } => *dimensions,
            _ => None,
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql())
    }
}
