//! Trait definitions
//!
//! This module defines core traits for database operations.

use crate::errors::StoreError;
use crate::query_builder::QueryBuilder;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait that defines common database operations for all entities
#[async_trait]
pub trait StoreObject: Clone + Send + Sync + Debug {
    /// The model type that this object represents
    type Model: Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>;

    /// Insert a record and return it as stored
    async fn create(&self, data: Self::Model) -> Result<Self::Model, StoreError>;

    /// List all objects of this type
    async fn list_all(&self) -> Result<Vec<Self::Model>, StoreError>;

    /// Count total objects of this type
    async fn count(&self) -> Result<i64, StoreError>;

    /// Find records matching query conditions
    async fn find(&self, query: QueryBuilder) -> Result<Vec<Self::Model>, StoreError>;

    /// Find first record matching query conditions
    async fn find_one(&self, query: QueryBuilder) -> Result<Option<Self::Model>, StoreError>;

    /// Count records matching query conditions
    async fn count_where(&self, query: QueryBuilder) -> Result<i64, StoreError>;

    /// Delete records matching query conditions, returning the number removed.
    /// A query without conditions is rejected.
    async fn delete_where(&self, query: QueryBuilder) -> Result<u64, StoreError>;
}
