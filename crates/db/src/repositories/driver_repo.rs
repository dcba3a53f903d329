//! Repository for the `drivers` table.

use paddock_core::catalog::DriverRecord;
use paddock_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use sqlx::PgPool;

use crate::models::driver::{Driver, DriverListParams};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rarity, series, season, collection_sub_name, min_gp_tier, \
    icon, price, duplicate_unlock_count, stats, created_at, updated_at";

/// Provides CRUD operations for drivers.
pub struct DriverRepo;

impl DriverRepo {
    /// Insert a new driver, returning the created row.
    ///
    /// Returns `None` if a driver with the same id already exists.
    pub async fn insert(pool: &PgPool, input: &DriverRecord) -> Result<Option<Driver>, sqlx::Error> {
        let query = format!(
            "INSERT INTO drivers \
                (id, name, rarity, series, season, collection_sub_name, min_gp_tier, \
                 icon, price, duplicate_unlock_count, stats) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(input.rarity)
            .bind(input.series)
            .bind(input.season)
            .bind(&input.collection_sub_name)
            .bind(input.min_gp_tier)
            .bind(&input.icon)
            .bind(input.price)
            .bind(input.duplicate_unlock_count)
            .bind(&input.stats)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every catalog field of an existing driver.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(pool: &PgPool, input: &DriverRecord) -> Result<Option<Driver>, sqlx::Error> {
        let query = format!(
            "UPDATE drivers SET \
                name = $2, rarity = $3, series = $4, season = $5, \
                collection_sub_name = $6, min_gp_tier = $7, icon = $8, \
                price = $9, duplicate_unlock_count = $10, stats = $11 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(input.rarity)
            .bind(input.series)
            .bind(input.season)
            .bind(&input.collection_sub_name)
            .bind(input.min_gp_tier)
            .bind(&input.icon)
            .bind(input.price)
            .bind(input.duplicate_unlock_count)
            .bind(&input.stats)
            .fetch_optional(pool)
            .await
    }

    /// Find a driver by its content id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Driver>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drivers WHERE id = $1");
        sqlx::query_as::<_, Driver>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch all drivers whose id is in `ids`.
    pub async fn find_by_ids(pool: &PgPool, ids: &[String]) -> Result<Vec<Driver>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drivers WHERE id = ANY($1)");
        sqlx::query_as::<_, Driver>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List drivers matching the optional filters.
    ///
    /// Ordered by rarity (highest first), then name.
    pub async fn list(pool: &PgPool, params: &DriverListParams) -> Result<Vec<Driver>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM drivers \
             WHERE ($1::INTEGER IS NULL OR rarity = $1) \
               AND ($2::INTEGER IS NULL OR series = $2) \
               AND ($3::INTEGER IS NULL OR season = $3) \
             ORDER BY rarity DESC, name, id \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(params.rarity)
            .bind(params.series)
            .bind(params.season)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
