//! INET columns
//!
//! IPv4 or IPv6 host addresses, optionally with a subnet.

use super::impl_pg_field;
use super::network::NetworkField;
use type_mapping::{ColumnType, FieldDef};

#[derive(Debug, Clone)]
pub struct InetField {
    definition: FieldDef,
}

impl InetField {
    pub fn new(name: &'static str) -> Self {
        Self {
            definition: FieldDef::new(name, ColumnType::Inet),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.definition = self.definition.nullable();
        self
    }
}

impl_pg_field!(InetField);

impl NetworkField for InetField {}
