//! Serialization utilities
//!
//! This module converts serializable records into typed column values.

use crate::coerce::CoercionError;
use crate::field::FieldDef;
use crate::types::PostgresValue;
use serde::Serialize;

/// Serialize a record and coerce each non-generated field to its column type.
///
/// JSONB columns keep the raw JSON document, except that a string holding
/// JSON text is stored as the parsed document. Every other column goes
/// through the scalar mapping before coercion. Missing keys are NULL.
/// Coercion failures are reported as `CoercionError::Field`.
pub fn serialize_to_row<T: Serialize>(
    data: &T,
    fields: &[FieldDef],
) -> Result<Vec<(FieldDef, PostgresValue)>, CoercionError> {
    let mut map = match serde_json::to_value(data) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(other) => {
            return Err(CoercionError::Serialization(format!(
                "expected a JSON object, got {}",
                other
            )))
        }
        Err(e) => return Err(CoercionError::Serialization(e.to_string())),
    };

    let mut row = Vec::with_capacity(fields.len());
    for field in fields.iter().filter(|f| !f.is_generated()) {
        let raw = map.remove(field.name).unwrap_or(serde_json::Value::Null);
        let value = if field.column_type.is_jsonb() && !raw.is_null() {
            PostgresValue::Json(json_document(raw))
        } else {
            PostgresValue::from(raw)
        };
        let value = field.coerce(value).map_err(|e| CoercionError::Field {
            field: field.name.to_string(),
            source: Box::new(e),
        })?;
        row.push((field.clone(), value));
    }

    Ok(row)
}

/// Parse JSON text held in a string; other strings stay JSON strings
fn json_document(raw: serde_json::Value) -> serde_json::Value {
    match raw {
        serde_json::Value::String(text) => {
            serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
        }
        other => other,
    }
}
