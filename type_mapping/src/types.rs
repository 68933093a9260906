//! Runtime values
//!
//! This module provides the typed values that are bound to query
//! parameters and the conversions from common Rust types.

use ipnetwork::IpNetwork;
use mac_address::MacAddress;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use uuid::Uuid;

/// PostgreSQL value ready to be bound as a query parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PostgresValue {
    Text(String),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Timestamp(chrono::DateTime<chrono::Utc>),
    Date(chrono::NaiveDate),
    Json(serde_json::Value),
    Network(IpNetwork),
    MacAddr(MacAddress),
    Array(Vec<PostgresValue>),
    Null,
}

impl PostgresValue {
    /// Wrap a JSON document without scalar conversion
    pub fn json(value: serde_json::Value) -> Self {
        PostgresValue::Json(value)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PostgresValue::Null)
    }

    /// Integer payload widened to i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PostgresValue::SmallInt(v) => Some(*v as i64),
            PostgresValue::Integer(v) => Some(*v as i64),
            PostgresValue::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Nesting depth of an array value; scalars have depth 0
    pub fn depth(&self) -> u32 {
        match self {
            PostgresValue::Array(items) => 1 + items.first().map(|i| i.depth()).unwrap_or(0),
            _ => 0,
        }
    }

    /// Convert back into a JSON document
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            PostgresValue::Text(s) => Value::String(s.clone()),
            PostgresValue::SmallInt(v) => Value::from(*v),
            PostgresValue::Integer(v) => Value::from(*v),
            PostgresValue::BigInt(v) => Value::from(*v),
            PostgresValue::Float(v) => serde_json::Number::from_f64(*v)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            PostgresValue::Boolean(b) => Value::Bool(*b),
            PostgresValue::Uuid(u) => Value::String(u.to_string()),
            PostgresValue::Timestamp(ts) => Value::String(ts.to_rfc3339()),
            PostgresValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            PostgresValue::Json(v) => v.clone(),
            PostgresValue::Network(n) => Value::String(n.to_string()),
            PostgresValue::MacAddr(m) => Value::String(m.to_string()),
            PostgresValue::Array(items) => Value::Array(items.iter().map(|i| i.to_json()).collect()),
            PostgresValue::Null => Value::Null,
        }
    }
}

/// Convert basic Rust types to PostgresValue
impl From<String> for PostgresValue {
    fn from(val: String) -> Self {
        PostgresValue::Text(val)
    }
}

impl From<&str> for PostgresValue {
    fn from(val: &str) -> Self {
        PostgresValue::Text(val.to_string())
    }
}

impl From<i16> for PostgresValue {
    fn from(val: i16) -> Self {
        PostgresValue::SmallInt(val)
    }
}

impl From<i32> for PostgresValue {
    fn from(val: i32) -> Self {
        PostgresValue::Integer(val)
    }
}

impl From<i64> for PostgresValue {
    fn from(val: i64) -> Self {
        PostgresValue::BigInt(val)
    }
}

impl From<f64> for PostgresValue {
    fn from(val: f64) -> Self {
        PostgresValue::Float(val)
    }
}

impl From<bool> for PostgresValue {
    fn from(val: bool) -> Self {
        PostgresValue::Boolean(val)
    }
}

impl From<Uuid> for PostgresValue {
    fn from(val: Uuid) -> Self {
        PostgresValue::Uuid(val)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for PostgresValue {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        PostgresValue::Timestamp(val)
    }
}

impl From<chrono::NaiveDate> for PostgresValue {
    fn from(val: chrono::NaiveDate) -> Self {
        PostgresValue::Date(val)
    }
}

impl From<IpNetwork> for PostgresValue {
    fn from(val: IpNetwork) -> Self {
        PostgresValue::Network(val)
    }
}

/// A bare address is a host network (/32 or /128)
impl From<IpAddr> for PostgresValue {
    fn from(val: IpAddr) -> Self {
        PostgresValue::Network(IpNetwork::from(val))
    }
}

impl From<MacAddress> for PostgresValue {
    fn from(val: MacAddress) -> Self {
        PostgresValue::MacAddr(val)
    }
}

/// JSON scalars map to typed scalars; objects stay JSON documents
impl From<serde_json::Value> for PostgresValue {
    fn from(val: serde_json::Value) -> Self {
        match val {
            serde_json::Value::String(s) => PostgresValue::Text(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        PostgresValue::Integer(i as i32)
                    } else {
                        PostgresValue::BigInt(i)
                    }
                } else if let Some(f) = n.as_f64() {
                    PostgresValue::Float(f)
                } else {
                    PostgresValue::Json(serde_json::Value::Number(n))
                }
            }
            serde_json::Value::Bool(b) => PostgresValue::Boolean(b),
            serde_json::Value::Null => PostgresValue::Null,
            serde_json::Value::Array(items) => {
                PostgresValue::Array(items.into_iter().map(PostgresValue::from).collect())
            }
            other => PostgresValue::Json(other),
        }
    }
}

impl<T> From<Vec<T>> for PostgresValue
where
    T: Into<PostgresValue>,
{
    fn from(val: Vec<T>) -> Self {
        PostgresValue::Array(val.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for PostgresValue
where
    T: Into<PostgresValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => PostgresValue::Null,
        }
    }
}
