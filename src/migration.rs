//! Table creation
//!
//! Creates and drops the tables of `TableMetadata` models from their
//! field definitions.

use crate::core::PgExt;
use crate::errors::PgExtError;
use crate::{debug_log, trace_log};
use store_object::traits::TableMetadata;
use store_object::validation::validate_table;

impl PgExt {
    /// Create the table for a model.
    /// If recreate is true, drops existing table first
    pub async fn create_table<T>(&self, recreate: bool) -> Result<(), PgExtError>
    where
        T: TableMetadata,
    {
        validate_table(T::table_name(), &T::fields())?;

        if recreate {
            self.drop_table::<T>().await?;
        }

        let create_table_sql = T::create_table_sql();
        debug_log!("Creating table with SQL: {}", create_table_sql);
        sqlx::query(&create_table_sql).execute(self.pool()).await?;

        tracing::info!(table = T::table_name(), recreate, "table ready");
        Ok(())
    }

    /// Drop the table for a model if it exists
    pub async fn drop_table<T>(&self) -> Result<(), PgExtError>
    where
        T: TableMetadata,
    {
        let drop_sql = T::drop_table_sql();
        trace_log!("Dropping table with SQL: {}", drop_sql);
        sqlx::query(&drop_sql).execute(self.pool()).await?;
        Ok(())
    }
}
