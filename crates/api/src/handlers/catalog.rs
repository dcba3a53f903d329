//! Read-only catalog browsing for drivers, car parts and boosts.
//!
//! Every endpoint requires an authenticated caller of any role.

use axum::extract::{Path, Query, State};
use axum::Json;
use paddock_core::catalog::{ENTITY_BOOST, ENTITY_CAR_PART, ENTITY_DRIVER};
use paddock_core::error::CoreError;
use paddock_db::models::boost::{Boost, BoostListParams};
use paddock_db::models::car_part::{CarPart, CarPartListParams};
use paddock_db::models::driver::{Driver, DriverListParams};
use paddock_db::repositories::{BoostRepo, CarPartRepo, DriverRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(entity: &'static str, id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

// ── Drivers ──────────────────────────────────────────────────────────

/// GET /api/v1/drivers
pub async fn list_drivers(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DriverListParams>,
) -> AppResult<Json<DataResponse<Vec<Driver>>>> {
    let drivers = DriverRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: drivers }))
}

/// GET /api/v1/drivers/{id}
pub async fn get_driver(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Driver>>> {
    let driver = DriverRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(ENTITY_DRIVER, id))?;
    Ok(Json(DataResponse { data: driver }))
}

// ── Car parts ────────────────────────────────────────────────────────

/// GET /api/v1/car-parts
pub async fn list_car_parts(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CarPartListParams>,
) -> AppResult<Json<DataResponse<Vec<CarPart>>>> {
    let parts = CarPartRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: parts }))
}

/// GET /api/v1/car-parts/{id}
pub async fn get_car_part(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<CarPart>>> {
    let part = CarPartRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(ENTITY_CAR_PART, id))?;
    Ok(Json(DataResponse { data: part }))
}

// ── Boosts ───────────────────────────────────────────────────────────

/// GET /api/v1/boosts
pub async fn list_boosts(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<BoostListParams>,
) -> AppResult<Json<DataResponse<Vec<Boost>>>> {
    let boosts = BoostRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: boosts }))
}

/// GET /api/v1/boosts/{id}
pub async fn get_boost(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Boost>>> {
    let boost = BoostRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(ENTITY_BOOST, id))?;
    Ok(Json(DataResponse { data: boost }))
}
