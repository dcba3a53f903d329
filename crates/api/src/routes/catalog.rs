use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog browse routes, mounted directly under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drivers", get(catalog::list_drivers))
        .route("/drivers/{id}", get(catalog::get_driver))
        .route("/car-parts", get(catalog::list_car_parts))
        .route("/car-parts/{id}", get(catalog::get_car_part))
        .route("/boosts", get(catalog::list_boosts))
        .route("/boosts/{id}", get(catalog::get_boost))
}
