//! Domain model structs and list parameters.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A conversion into the canonical `paddock_core::catalog` record
//! - A `Deserialize` list-parameter struct for filtered listings

pub mod boost;
pub mod car_part;
pub mod driver;
