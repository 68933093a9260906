//! Network operators shared by CIDR and INET columns
//!
//! Arguments are coerced to INET so that plain addresses (`192.168.1.5`)
//! and networks with host bits are accepted on both column types.

use super::PgField;
use crate::errors::StoreError;
use crate::query_builder::filter::{QueryFilter, QueryOperator};
use crate::query_builder::operators::{OperatorRegistry, RegistryError};
use type_mapping::PostgresValue;

/// Lookup names registered once for both network column types
pub const OPERATORS: &[(&str, QueryOperator)] = &[
    ("contained_by", QueryOperator::ContainedBy),
    ("contained_by_eq", QueryOperator::ContainedByEq),
    ("contains_subnet", QueryOperator::ContainsSubnet),
    ("contains_subnet_eq", QueryOperator::ContainsSubnetEq),
    ("contains_or_eq", QueryOperator::ContainsOrEq),
];

pub trait NetworkField: PgField + Sized {
    /// `column << value`: strictly inside the given network
    fn contained_by(&self, value: impl Into<PostgresValue>) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::ContainedBy, value)
    }

    /// `column <<= value`: inside or equal to the given network
    fn contained_by_eq(&self, value: impl Into<PostgresValue>) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::ContainedByEq, value)
    }

    /// `column >> value`: strictly contains the given address or network
    fn contains_subnet(&self, value: impl Into<PostgresValue>) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::ContainsSubnet, value)
    }

    /// `column >>= value`: contains or equals the given address or network
    fn contains_subnet_eq(
        &self,
        value: impl Into<PostgresValue>,
    ) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::ContainsSubnetEq, value)
    }

    /// `column && value`: either side contains the other
    fn contains_or_eq(&self, value: impl Into<PostgresValue>) -> Result<QueryFilter, StoreError> {
        self.filter(QueryOperator::ContainsOrEq, value)
    }
}

pub fn register_operators(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    registry.register_all(OPERATORS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{CidrField, InetField};

    #[test]
    fn test_invalid_address_is_rejected() {
        let inet = InetField::new("inet");
        match inet.contained_by("192.168.1.300/24") {
            Err(StoreError::Coercion { field, .. }) => assert_eq!(field, "inet"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_ipv6_arguments() {
        let cidr = CidrField::new("cidr");
        match cidr.contains_subnet("2001:db8::1").unwrap() {
            QueryFilter::Condition(c) => {
                assert_eq!(c.operator, QueryOperator::ContainsSubnet);
                assert_eq!(c.cast.as_deref(), Some("INET"));
            }
            other => panic!("unexpected filter {:?}", other),
        }
    }

    #[test]
    fn test_registration() {
        let mut registry = OperatorRegistry::new();
        register_operators(&mut registry).unwrap();
        assert_eq!(registry.len(), OPERATORS.len());
        assert!(register_operators(&mut registry).is_err());
    }
}
