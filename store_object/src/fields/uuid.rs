//! UUID columns stored with the native UUID type

use super::impl_pg_field;
use type_mapping::{ColumnType, FieldDef};

#[derive(Debug, Clone)]
pub struct UuidField {
    definition: FieldDef,
}

impl UuidField {
    pub fn new(name: &'static str) -> Self {
        Self {
            definition: FieldDef::new(name, ColumnType::Uuid),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.definition = self.definition.nullable();
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.definition = self.definition.primary_key();
        self
    }
}

impl_pg_field!(UuidField);
