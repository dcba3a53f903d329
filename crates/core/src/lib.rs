//! Domain types and pure logic for the Paddock catalog.
//!
//! Nothing in this crate touches the database or the network; the import
//! orchestrator reaches storage through [`content_import::AssetStore`].

pub mod catalog;
pub mod changes;
pub mod content_cache;
pub mod content_import;
pub mod error;
pub mod pagination;
pub mod remap;
pub mod roles;
pub mod types;
