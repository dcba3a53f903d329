pub mod catalog;
pub mod content_cache;
