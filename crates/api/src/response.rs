//! Shared response envelope types for API handlers.
//!
//! Catalog responses use a `{ "data": ... }` envelope. The content-cache
//! upload has its own top-level shape (see `handlers::content_cache`).

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: drivers }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
