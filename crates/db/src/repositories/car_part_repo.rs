//! Repository for the `car_parts` table.

use paddock_core::catalog::CarPartRecord;
use paddock_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use sqlx::PgPool;

use crate::models::car_part::{CarPart, CarPartListParams};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rarity, series, season, car_part_type, min_gp_tier, \
    icon, price, duplicate_unlock_count, stats, created_at, updated_at";

/// Provides CRUD operations for car parts.
pub struct CarPartRepo;

impl CarPartRepo {
    /// Insert a new car part. Returns `None` if the id is already taken.
    pub async fn insert(
        pool: &PgPool,
        input: &CarPartRecord,
    ) -> Result<Option<CarPart>, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_parts \
                (id, name, rarity, series, season, car_part_type, min_gp_tier, \
                 icon, price, duplicate_unlock_count, stats) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarPart>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(input.rarity)
            .bind(input.series)
            .bind(input.season)
            .bind(input.car_part_type)
            .bind(input.min_gp_tier)
            .bind(&input.icon)
            .bind(input.price)
            .bind(input.duplicate_unlock_count)
            .bind(&input.stats)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every catalog field of an existing car part.
    pub async fn update(
        pool: &PgPool,
        input: &CarPartRecord,
    ) -> Result<Option<CarPart>, sqlx::Error> {
        let query = format!(
            "UPDATE car_parts SET \
                name = $2, rarity = $3, series = $4, season = $5, \
                car_part_type = $6, min_gp_tier = $7, icon = $8, \
                price = $9, duplicate_unlock_count = $10, stats = $11 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarPart>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(input.rarity)
            .bind(input.series)
            .bind(input.season)
            .bind(input.car_part_type)
            .bind(input.min_gp_tier)
            .bind(&input.icon)
            .bind(input.price)
            .bind(input.duplicate_unlock_count)
            .bind(&input.stats)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<CarPart>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_parts WHERE id = $1");
        sqlx::query_as::<_, CarPart>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_ids(pool: &PgPool, ids: &[String]) -> Result<Vec<CarPart>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_parts WHERE id = ANY($1)");
        sqlx::query_as::<_, CarPart>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List car parts matching the optional filters, highest rarity first.
    pub async fn list(
        pool: &PgPool,
        params: &CarPartListParams,
    ) -> Result<Vec<CarPart>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM car_parts \
             WHERE ($1::INTEGER IS NULL OR rarity = $1) \
               AND ($2::INTEGER IS NULL OR series = $2) \
               AND ($3::INTEGER IS NULL OR season = $3) \
               AND ($4::INTEGER IS NULL OR car_part_type = $4) \
             ORDER BY rarity DESC, name, id \
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, CarPart>(&query)
            .bind(params.rarity)
            .bind(params.series)
            .bind(params.season)
            .bind(params.car_part_type)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
