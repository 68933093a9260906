use thiserror::Error;
use type_mapping::CoercionError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error on {table} during {operation}: {source}")]
    Database {
        table: String,
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Query failed on {table}: {source} (sql: {sql})")]
    QueryExecution {
        table: String,
        sql: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Invalid value for field '{field}': {source}")]
    Coercion {
        field: String,
        #[source]
        source: CoercionError,
    },

    #[error("Unknown field '{field}' on {table}")]
    UnknownField { table: String, field: String },

    #[error("Operator '{operator}' is not supported for {column_type} field '{field}'")]
    OperatorNotSupported {
        field: String,
        operator: String,
        column_type: String,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn database_operation(table: &str, operation: &str, source: sqlx::Error) -> Self {
        Self::Database {
            table: table.to_string(),
            operation: operation.to_string(),
            source,
        }
    }

    pub fn query_execution(table: &str, sql: &str, source: sqlx::Error) -> Self {
        Self::QueryExecution {
            table: table.to_string(),
            sql: sql.to_string(),
            source,
        }
    }

    pub fn coercion(field: &str, source: CoercionError) -> Self {
        match source {
            CoercionError::Serialization(msg) => Self::Serialization(msg),
            CoercionError::Field { field, source } => Self::Coercion {
                field,
                source: *source,
            },
            source => Self::Coercion {
                field: field.to_string(),
                source,
            },
        }
    }
}
