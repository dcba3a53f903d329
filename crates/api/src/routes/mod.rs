pub mod catalog;
pub mod content_cache;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /drivers                     list (auth)
/// /drivers/{id}                get (auth)
/// /car-parts                   list (auth)
/// /car-parts/{id}              get (auth)
/// /boosts                      list (auth)
/// /boosts/{id}                 get (auth)
///
/// /admin/content-cache         upload content-cache JSON (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .nest("/admin/content-cache", content_cache::router())
}
