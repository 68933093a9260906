//! Validation module
//!
//! Identifier checks for table and column names that are interpolated
//! into generated SQL.

use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use type_mapping::FieldDef;

/// Validation errors for database identifiers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name contains invalid characters (only alphanumeric and underscore allowed)
    #[error("Invalid characters in name '{0}': only alphanumeric characters and underscores are allowed")]
    InvalidCharacters(String),

    /// Name is too long (PostgreSQL limit is 63 characters)
    #[error("Name '{name}' is too long: {length} characters (max {max_length})")]
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },

    #[error("Name cannot be empty")]
    Empty,

    /// Name starts with invalid character (must start with letter or underscore)
    #[error("Name '{0}' must start with a letter or underscore")]
    InvalidStartCharacter(String),

    #[error("Name '{0}' is a reserved SQL keyword")]
    ReservedKeyword(String),

    /// Double underscores separate field names from lookup operators
    #[error("Field name '{0}' must not contain '__'")]
    LookupSeparator(String),

    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("Table '{0}' declares no fields")]
    NoFields(String),
}

/// A validated table name that is safe to use in SQL queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedTableName(String);

impl ValidatedTableName {
    /// PostgreSQL identifier length limit
    const MAX_LENGTH: usize = 63;

    /// Create a new validated table name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    /// Get the validated name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Common validation logic for SQL identifiers
    fn validate_identifier(name: &str) -> Result<(), ValidationError> {
        let first_char = name.chars().next().ok_or(ValidationError::Empty)?;

        if name.len() > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                name: name.to_string(),
                length: name.len(),
                max_length: Self::MAX_LENGTH,
            });
        }

        if !first_char.is_ascii_alphabetic() && first_char != '_' {
            return Err(ValidationError::InvalidStartCharacter(name.to_string()));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::InvalidCharacters(name.to_string()));
        }

        if Self::is_reserved_keyword(name) {
            return Err(ValidationError::ReservedKeyword(name.to_string()));
        }

        Ok(())
    }

    /// Check if a name is a reserved SQL keyword.
    /// Type names such as `uuid` or `cidr` are valid column names.
    fn is_reserved_keyword(name: &str) -> bool {
        const RESERVED_KEYWORDS: &[&str] = &[
            "ALL", "AND", "ANY", "ARRAY", "AS", "ASC", "BOTH", "CASE", "CAST", "CHECK",
            "COLUMN", "CONSTRAINT", "CREATE", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DO",
            "DROP", "ELSE", "END", "EXCEPT", "FALSE", "FOR", "FOREIGN", "FROM", "GRANT",
            "GROUP", "HAVING", "IN", "INSERT", "INTERSECT", "INTO", "LIMIT", "NOT", "NULL",
            "OFFSET", "ON", "OR", "ORDER", "PRIMARY", "REFERENCES", "RETURNING", "SELECT",
            "TABLE", "THEN", "TO", "TRUE", "UNION", "UNIQUE", "UPDATE", "USER", "USING",
            "WHEN", "WHERE", "WITH",
        ];

        RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
    }
}

impl fmt::Display for ValidatedTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated field name that is safe to use in SQL queries and lookup keys
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedFieldName(String);

impl ValidatedFieldName {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        ValidatedTableName::validate_identifier(name)?;
        if name.contains("__") {
            return Err(ValidationError::LookupSeparator(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a table and its columns before generating DDL
pub fn validate_table(table: &str, fields: &[FieldDef]) -> Result<(), ValidationError> {
    ValidatedTableName::new(table)?;
    if fields.is_empty() {
        return Err(ValidationError::NoFields(table.to_string()));
    }

    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        ValidatedFieldName::new(field.name)?;
        if !seen.insert(field.name) {
            return Err(ValidationError::DuplicateField(field.name.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use type_mapping::ColumnType;

    #[test]
    fn test_valid_table_names() {
        let valid_names = [
            "users",
            "user_profiles",
            "UserProfiles",
            "_private_table",
            "table123",
            "a",
            &"a".repeat(63), // Max length
        ];

        for name in valid_names {
            assert!(
                ValidatedTableName::new(name).is_ok(),
                "Should accept valid name: {}",
                name
            );
        }
    }

    #[test]
    fn test_invalid_table_names() {
        let test_cases = [
            ("", ValidationError::Empty),
            (
                "123table",
                ValidationError::InvalidStartCharacter("123table".to_string()),
            ),
            (
                "user-name",
                ValidationError::InvalidCharacters("user-name".to_string()),
            ),
            (
                "user name",
                ValidationError::InvalidCharacters("user name".to_string()),
            ),
            (
                "SELECT",
                ValidationError::ReservedKeyword("SELECT".to_string()),
            ),
            (
                "select",
                ValidationError::ReservedKeyword("select".to_string()),
            ),
        ];

        for (name, expected_error) in test_cases {
            let result = ValidatedTableName::new(name);
            assert_eq!(result.unwrap_err(), expected_error, "{}", name);
        }
    }

    #[test]
    fn test_too_long_name() {
        let long_name = "a".repeat(64);
        match ValidatedTableName::new(&long_name).unwrap_err() {
            ValidationError::TooLong {
                length, max_length, ..
            } => {
                assert_eq!(length, 64);
                assert_eq!(max_length, 63);
            }
            other => panic!("Expected TooLong error, got {:?}", other),
        }
    }

    #[test]
    fn test_type_names_are_valid_columns() {
        for name in ["uuid", "cidr", "inet", "jsonb", "macaddr", "data"] {
            assert!(ValidatedFieldName::new(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_field_names_cannot_contain_separator() {
        assert_eq!(
            ValidatedFieldName::new("net__mask").unwrap_err(),
            ValidationError::LookupSeparator("net__mask".to_string())
        );
        // Tables may use it
        assert!(ValidatedTableName::new("net__mask").is_ok());
    }

    #[test]
    fn test_validate_table() {
        let fields = vec![
            FieldDef::serial_primary_key("id"),
            FieldDef::new("cidr", ColumnType::Cidr),
        ];
        assert!(validate_table("networks", &fields).is_ok());

        let duplicated = vec![
            FieldDef::new("cidr", ColumnType::Cidr),
            FieldDef::new("cidr", ColumnType::Inet),
        ];
        assert_eq!(
            validate_table("networks", &duplicated),
            Err(ValidationError::DuplicateField("cidr".to_string()))
        );

        assert_eq!(
            validate_table("networks", &[]),
            Err(ValidationError::NoFields("networks".to_string()))
        );
        assert!(validate_table("order", &fields).is_err());
    }

    #[test]
    fn test_display_traits() {
        let table_name = ValidatedTableName::new("users").unwrap();
        let field_name = ValidatedFieldName::new("id").unwrap();

        assert_eq!(format!("{}", table_name), "users");
        assert_eq!(format!("{}", field_name), "id");
    }
}
