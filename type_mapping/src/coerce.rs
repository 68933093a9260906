//! Value coercion
//!
//! Converts loosely typed values (text, JSON, addresses) into the
//! representation the driver expects for a given column type.

use crate::column::ColumnType;
use crate::types::PostgresValue;
use ipnetwork::IpNetwork;
use mac_address::MacAddress;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    #[error("invalid UUID '{0}'")]
    InvalidUuid(String),

    #[error("invalid IP network '{0}'")]
    InvalidNetwork(String),

    #[error("invalid CIDR value '{0}': host bits are set right of the mask")]
    CidrHostBits(String),

    #[error("invalid MAC address '{0}'")]
    InvalidMacAddr(String),

    #[error("invalid JSON document: {0}")]
    InvalidJson(String),

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("expected an array for {0}")]
    NotAnArray(String),

    #[error("array has {found} dimensions, column declares {expected}")]
    DimensionMismatch { expected: u32, found: u32 },

    #[error("cannot store {value} in a {column} column")]
    TypeMismatch { column: String, value: String },

    #[error("field '{0}' is not nullable")]
    NullNotAllowed(String),

    #[error("failed to serialize record: {0}")]
    Serialization(String),

    #[error("field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: Box<CoercionError>,
    },
}

impl ColumnType {
    /// Coerce a value into the representation bound for this column type.
    /// `Null` always passes; nullability is checked by `FieldDef`.
    pub fn coerce(&self, value: PostgresValue) -> Result<PostgresValue, CoercionError> {
        if value.is_null() {
            return Ok(value);
        }

        match self {
            ColumnType::Uuid => coerce_uuid(value),
            ColumnType::Inet => coerce_network(value),
            ColumnType::Cidr => {
                let network = coerce_network(value)?;
                if let PostgresValue::Network(n) = &network {
                    if n.network() != n.ip() {
                        return Err(CoercionError::CidrHostBits(n.to_string()));
                    }
                }
                Ok(network)
            }
            ColumnType::MacAddr => coerce_mac(value),
            ColumnType::Jsonb => coerce_json(value),
            ColumnType::Array { item, dimensions } => coerce_array(item, *dimensions, value),
            ColumnType::Serial | ColumnType::Integer => match value.as_i64() {
                Some(i) if i >= i32::MIN as i64 && i <= i32::MAX as i64 => {
                    Ok(PostgresValue::Integer(i as i32))
                }
                _ => Err(mismatch(self, &value)),
            },
            ColumnType::SmallInt => match value.as_i64() {
                Some(i) if i >= i16::MIN as i64 && i <= i16::MAX as i64 => {
                    Ok(PostgresValue::SmallInt(i as i16))
                }
                _ => Err(mismatch(self, &value)),
            },
            ColumnType::BigInt => value
                .as_i64()
                .map(PostgresValue::BigInt)
                .ok_or_else(|| mismatch(self, &value)),
            ColumnType::Real | ColumnType::Double => match value {
                PostgresValue::Float(_) => Ok(value),
                other => other
                    .as_i64()
                    .map(|i| PostgresValue::Float(i as f64))
                    .ok_or_else(|| mismatch(self, &other)),
            },
            ColumnType::Boolean => match value {
                PostgresValue::Boolean(_) => Ok(value),
                other => Err(mismatch(self, &other)),
            },
            ColumnType::Text | ColumnType::Varchar(_) => match value {
                PostgresValue::Text(_) => Ok(value),
                other => Err(mismatch(self, &other)),
            },
            ColumnType::Timestamp => match value {
                PostgresValue::Timestamp(_) => Ok(value),
                PostgresValue::Text(s) => chrono::DateTime::parse_from_rfc3339(&s)
                    .map(|dt| PostgresValue::Timestamp(dt.with_timezone(&chrono::Utc)))
                    .map_err(|_| CoercionError::InvalidTimestamp(s)),
                other => Err(mismatch(self, &other)),
            },
            ColumnType::Date => match value {
                PostgresValue::Date(_) => Ok(value),
                PostgresValue::Timestamp(ts) => Ok(PostgresValue::Date(ts.date_naive())),
                PostgresValue::Text(s) => chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .map(PostgresValue::Date)
                    .map_err(|_| CoercionError::InvalidDate(s)),
                other => Err(mismatch(self, &other)),
            },
        }
    }
}

fn mismatch(column: &ColumnType, value: &PostgresValue) -> CoercionError {
    CoercionError::TypeMismatch {
        column: column.sql(),
        value: format!("{:?}", value),
    }
}

fn coerce_uuid(value: PostgresValue) -> Result<PostgresValue, CoercionError> {
    match value {
        PostgresValue::Uuid(_) => Ok(value),
        PostgresValue::Text(s) => Uuid::parse_str(s.trim())
            .map(PostgresValue::Uuid)
            .map_err(|_| CoercionError::InvalidUuid(s)),
        other => Err(mismatch(&ColumnType::Uuid, &other)),
    }
}

fn coerce_network(value: PostgresValue) -> Result<PostgresValue, CoercionError> {
    match value {
        PostgresValue::Network(_) => Ok(value),
        PostgresValue::Text(s) => IpNetwork::from_str(s.trim())
            .map(PostgresValue::Network)
            .map_err(|_| CoercionError::InvalidNetwork(s)),
        other => Err(mismatch(&ColumnType::Inet, &other)),
    }
}

fn coerce_mac(value: PostgresValue) -> Result<PostgresValue, CoercionError> {
    match value {
        PostgresValue::MacAddr(_) => Ok(value),
        PostgresValue::Text(s) => MacAddress::from_str(s.trim())
            .map(PostgresValue::MacAddr)
            .map_err(|_| CoercionError::InvalidMacAddr(s)),
        other => Err(mismatch(&ColumnType::MacAddr, &other)),
    }
}

fn coerce_json(value: PostgresValue) -> Result<PostgresValue, CoercionError> {
    match value {
        PostgresValue::Json(_) => Ok(value),
        PostgresValue::Text(s) => serde_json::from_str(&s)
            .map(PostgresValue::Json)
            .map_err(|e| CoercionError::InvalidJson(e.to_string())),
        other => Ok(PostgresValue::Json(other.to_json())),
    }
}

fn coerce_array(
    item: &ColumnType,
    dimensions: Option<u32>,
    value: PostgresValue,
) -> Result<PostgresValue, CoercionError> {
    let items = match value {
        PostgresValue::Array(items) => items,
        PostgresValue::Json(serde_json::Value::Array(items)) => {
            items.into_iter().map(PostgresValue::from).collect()
        }
        other => return Err(CoercionError::NotAnArray(format!("{:?}", other))),
    };

    if let Some(expected) = dimensions {
        if !items.is_empty() {
            for element in &items {
                let found = 1 + element.depth();
                if found != expected {
                    return Err(CoercionError::DimensionMismatch { expected, found });
                }
            }
        }
    }

    let coerced = items
        .into_iter()
        .map(|element| coerce_element(item, element))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PostgresValue::Array(coerced))
}

/// Sub-arrays of a multi-dimensional array share the element type.
/// When the element type is itself an array (IN on an array column) each
/// element is a whole array value.
fn coerce_element(item: &ColumnType, element: PostgresValue) -> Result<PostgresValue, CoercionError> {
    if let ColumnType::Array { .. } = item {
        return item.coerce(element);
    }

    match element {
        PostgresValue::Array(inner) => inner
            .into_iter()
            .map(|e| coerce_element(item, e))
            .collect::<Result<Vec<_>, _>>()
            .map(PostgresValue::Array),
        scalar => item.coerce(scalar),
    }
}
