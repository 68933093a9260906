use crate::traits::TableMetadata;
use crate::DbPool;

/// Generic database store that provides default implementations for all database operations
#[derive(Clone)]
pub struct GenericStore<T: TableMetadata> {
    pub(crate) db_pool: DbPool,
    pub(crate) _phantom: std::marker::PhantomData<T>,
}

impl<T: TableMetadata> std::fmt::Debug for GenericStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericStore")
            .field("table", &T::table_name())
            .field("pool_size", &self.db_pool.size())
            .finish()
    }
}

impl<T: TableMetadata> GenericStore<T> {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            db_pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }

    /// Query builder seeded with a lookup on this store's model
    pub fn lookup(
        &self,
        key: &str,
        value: impl Into<type_mapping::PostgresValue>,
    ) -> Result<crate::QueryBuilder, crate::StoreError> {
        crate::QueryBuilder::new().lookup::<T>(key, value)
    }
}
