//! MACADDR columns

use super::impl_pg_field;
use type_mapping::{ColumnType, FieldDef};

#[derive(Debug, Clone)]
pub struct MacAddrField {
    definition: FieldDef,
}

impl MacAddrField {
    pub fn new(name: &'static str) -> Self {
        Self {
            definition: FieldDef::new(name, ColumnType::MacAddr),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.definition = self.definition.nullable();
        self
    }
}

impl_pg_field!(MacAddrField);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::PgField;
    use crate::query_builder::QueryFilter;
    use type_mapping::{MacAddress, PostgresValue};

    #[test]
    fn test_equality_filter_casts_to_macaddr() {
        let mac = MacAddrField::new("mac");
        match mac.eq("08-00-2b-01-02-03").unwrap() {
            QueryFilter::Condition(c) => {
                assert_eq!(c.cast.as_deref(), Some("MACADDR"));
                assert_eq!(
                    c.value,
                    Some(PostgresValue::MacAddr(MacAddress::new([8, 0, 0x2b, 1, 2, 3])))
                );
            }
            other => panic!("unexpected filter {:?}", other),
        }
        assert!(mac.eq("not a mac").is_err());
    }
}
