//! Unified type mapping between Rust values and PostgreSQL column types
//! This crate provides the column type catalogue, runtime values and the
//! coercion rules shared by the query and store layers.

pub mod coerce;
pub mod column;
pub mod field;
pub mod serialize;
pub mod types;

pub use coerce::CoercionError;
pub use column::ColumnType;
pub use field::FieldDef;
pub use serialize::serialize_to_row;
pub use types::PostgresValue;

// Re-export the value crates used in the public API
pub use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
pub use mac_address::MacAddress;
