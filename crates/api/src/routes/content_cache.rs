//! Mounted at `/admin/content-cache`.

use axum::routing::post;
use axum::Router;

use crate::handlers::content_cache;
use crate::state::AppState;

/// ```text
/// POST   /    -> upload_content_cache   (multipart, admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(content_cache::upload_content_cache))
}
