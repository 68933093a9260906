//! Lookup resolution
//!
//! Turns a field definition and an operator, or a `field__operator`
//! lookup key, into a typed filter condition.

use crate::errors::StoreError;
use crate::query_builder::filter::{QueryFilter, QueryOperator};
use crate::query_builder::operators::OperatorRegistry;
use type_mapping::{FieldDef, PostgresValue};

/// Build a condition on `field`, coercing the value to the operator's
/// argument type and attaching the parameter cast.
pub fn build_filter(
    field: &FieldDef,
    operator: QueryOperator,
    value: PostgresValue,
) -> Result<QueryFilter, StoreError> {
    if !operator.supports(&field.column_type) {
        return Err(StoreError::OperatorNotSupported {
            field: field.name.to_string(),
            operator: format!("{:?}", operator),
            column_type: field.column_type.sql(),
        });
    }

    match operator {
        QueryOperator::IsNull | QueryOperator::IsNotNull => {
            return Ok(QueryFilter::condition(field.name, operator, None));
        }
        // Comparing with NULL means testing for NULL
        QueryOperator::Eq if value.is_null() => {
            return Ok(QueryFilter::is_null(field.name));
        }
        QueryOperator::Ne if value.is_null() => {
            return Ok(QueryFilter::is_not_null(field.name));
        }
        _ => {}
    }

    let value = match operator.argument_type(&field.column_type) {
        Some(argument_type) => argument_type
            .coerce(value)
            .map_err(|e| StoreError::coercion(field.name, e))?,
        None => value,
    };

    Ok(QueryFilter::cast_condition(
        field.name,
        operator,
        Some(value),
        operator.param_cast(&field.column_type),
    ))
}

/// Resolve a lookup key such as `cidr__contained_by` against a table's fields
pub fn resolve_lookup(
    registry: &OperatorRegistry,
    table: &str,
    fields: &[FieldDef],
    key: &str,
    value: PostgresValue,
) -> Result<QueryFilter, StoreError> {
    let (field_name, operator) = registry.split_lookup(key);

    let field = fields
        .iter()
        .find(|f| f.name == field_name)
        .ok_or_else(|| StoreError::UnknownField {
            table: table.to_string(),
            field: field_name.to_string(),
        })?;

    // `isnull` takes a boolean
    if operator == QueryOperator::IsNull {
        return match value {
            PostgresValue::Boolean(true) => Ok(QueryFilter::is_null(field.name)),
            PostgresValue::Boolean(false) => Ok(QueryFilter::is_not_null(field.name)),
            other => Err(StoreError::InvalidQuery(format!(
                "'{}' expects a boolean, got {:?}",
                key, other
            ))),
        };
    }

    build_filter(field, operator, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::filter::QueryCondition;
    use type_mapping::ColumnType;

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::serial_primary_key("id"),
            FieldDef::new("data", ColumnType::array(ColumnType::Text)),
            FieldDef::new("cidr", ColumnType::Cidr).nullable(),
            FieldDef::new("meta", ColumnType::Jsonb),
            FieldDef::new("uid", ColumnType::Uuid),
        ]
    }

    fn resolve(key: &str, value: PostgresValue) -> Result<QueryFilter, StoreError> {
        resolve_lookup(OperatorRegistry::global(), "things", &fields(), key, value)
    }

    fn condition(filter: QueryFilter) -> QueryCondition {
        match filter {
            QueryFilter::Condition(c) => c,
            other => panic!("expected a condition, got {:?}", other),
        }
    }

    #[test]
    fn test_array_lookup() {
        let c = condition(resolve("data__array_contains", vec!["c"].into()).unwrap());
        assert_eq!(c.field, "data");
        assert_eq!(c.operator, QueryOperator::ArrayContains);
        assert_eq!(c.cast.as_deref(), Some("TEXT[]"));
        assert_eq!(c.value, Some(PostgresValue::from(vec!["c"])));
    }

    #[test]
    fn test_network_lookup_coerces_to_inet() {
        let c = condition(resolve("cidr__contained_by", "192.168.1.0/24".into()).unwrap());
        assert_eq!(c.operator, QueryOperator::ContainedBy);
        assert_eq!(c.cast.as_deref(), Some("INET"));
        assert!(matches!(c.value, Some(PostgresValue::Network(_))));

        // Addresses with host bits are valid arguments even on CIDR columns
        assert!(resolve("cidr__contains_subnet", "192.168.1.5/24".into()).is_ok());
    }

    #[test]
    fn test_plain_key_is_exact_match_with_column_cast() {
        let id = uuid::Uuid::new_v4();
        let c = condition(resolve("uid", id.to_string().into()).unwrap());
        assert_eq!(c.operator, QueryOperator::Eq);
        assert_eq!(c.value, Some(PostgresValue::Uuid(id)));
        assert_eq!(c.cast.as_deref(), Some("UUID"));

        let c = condition(resolve("cidr", "10.0.0.0/8".into()).unwrap());
        assert_eq!(c.cast.as_deref(), Some("CIDR"));
    }

    #[test]
    fn test_jsonb_key_lookups() {
        let c = condition(resolve("meta__jsonb_has_key", "foo".into()).unwrap());
        assert_eq!(c.operator, QueryOperator::JsonbHasKey);
        assert_eq!(c.cast, None);

        let c = condition(resolve("meta__jsonb_has_any_keys", vec!["a", "b"].into()).unwrap());
        assert_eq!(c.cast.as_deref(), Some("TEXT[]"));

        let c = condition(resolve("meta__jsonb_contains", r#"{"a": 1}"#.into()).unwrap());
        assert_eq!(c.value, Some(PostgresValue::Json(serde_json::json!({"a": 1}))));
        assert_eq!(c.cast.as_deref(), Some("JSONB"));
    }

    #[test]
    fn test_isnull_lookup() {
        let c = condition(resolve("cidr__isnull", true.into()).unwrap());
        assert_eq!(c.operator, QueryOperator::IsNull);
        let c = condition(resolve("cidr__isnull", false.into()).unwrap());
        assert_eq!(c.operator, QueryOperator::IsNotNull);
        assert!(matches!(
            resolve("cidr__isnull", "yes".into()),
            Err(StoreError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_eq_null_becomes_is_null() {
        let c = condition(resolve("cidr", PostgresValue::Null).unwrap());
        assert_eq!(c.operator, QueryOperator::IsNull);
        assert!(c.value.is_none());
    }

    #[test]
    fn test_in_lookup_casts_elements() {
        let c = condition(resolve("uid__in", vec![uuid::Uuid::nil().to_string()].into()).unwrap());
        assert_eq!(c.operator, QueryOperator::In);
        assert_eq!(c.cast.as_deref(), Some("UUID"));
        assert_eq!(
            c.value,
            Some(PostgresValue::Array(vec![PostgresValue::Uuid(uuid::Uuid::nil())]))
        );
    }

    #[test]
    fn test_unknown_field() {
        match resolve("nope__array_contains", vec!["a"].into()) {
            Err(StoreError::UnknownField { table, field }) => {
                assert_eq!(table, "things");
                assert_eq!(field, "nope");
            }
            other => panic!("unexpected result {:?}", other),
        }

        // A misspelled operator reads as a field name
        assert!(matches!(
            resolve("data__array_contans", vec!["a"].into()),
            Err(StoreError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_operator_not_supported_for_column() {
        for key in ["cidr__array_contains", "data__contained_by", "uid__jsonb_has_key", "cidr__like"] {
            assert!(
                matches!(
                    resolve(key, "x".into()),
                    Err(StoreError::OperatorNotSupported { .. })
                ),
                "{}",
                key
            );
        }
    }

    #[test]
    fn test_coercion_errors_name_the_field() {
        match resolve("uid", "not-a-uuid".into()) {
            Err(StoreError::Coercion { field, .. }) => assert_eq!(field, "uid"),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            resolve("data__array_overlap", "a".into()),
            Err(StoreError::Coercion { .. })
        ));
    }
}
