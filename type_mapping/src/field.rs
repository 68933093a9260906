//! Field definitions
//!
//! A field couples a column name with its native type and nullability.

use crate::coerce::CoercionError;
use crate::column::ColumnType;
use crate::types::PostgresValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
}

impl FieldDef {
    pub fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            nullable: false,
            primary_key: false,
        }
    }

    /// Auto-incrementing integer primary key
    pub fn serial_primary_key(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::Serial,
            nullable: false,
            primary_key: true,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Generated by the database, never part of an INSERT
    pub fn is_generated(&self) -> bool {
        matches!(self.column_type, ColumnType::Serial)
    }

    /// Column definition for CREATE TABLE
    pub fn ddl(&self) -> String {
        let mut ddl = format!("{} {}", self.name, self.column_type.sql());
        if self.primary_key {
            ddl.push_str(" PRIMARY KEY");
        } else if !self.nullable {
            ddl.push_str(" NOT NULL");
        }
        ddl
    }

    /// Coerce a value for this column, rejecting NULL on required fields
    pub fn coerce(&self, value: PostgresValue) -> Result<PostgresValue, CoercionError> {
        if value.is_null() && !self.nullable {
            return Err(CoercionError::NullNotAllowed(self.name.to_string()));
        }
        self.column_type.coerce(value)
    }
}
