//! CIDR columns
//!
//! IPv4 or IPv6 network specifications. Stored values must not have bits
//! set to the right of the netmask.

use super::impl_pg_field;
use super::network::NetworkField;
use type_mapping::{ColumnType, FieldDef};

#[derive(Debug, Clone)]
pub struct CidrField {
    definition: FieldDef,
}

impl CidrField {
    pub fn new(name: &'static str) -> Self {
        Self {
            definition: FieldDef::new(name, ColumnType::Cidr),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.definition = self.definition.nullable();
        self
    }
}

impl_pg_field!(CidrField);

impl NetworkField for CidrField {}
