//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

pub mod builder;
pub mod filter;
pub mod lookup;
pub mod operators;
pub mod ordering;
pub mod sql_generation;


pub use builder::QueryBuilder;
pub use filter::{LogicalOperator, QueryCondition, QueryFilter, QueryOperator};
pub use lookup::{build_filter, resolve_lookup};
pub use operators::{OperatorRegistry, RegistryError, BASE_OPERATORS, LOOKUP_SEPARATOR};
pub use ordering::SortOrder;
