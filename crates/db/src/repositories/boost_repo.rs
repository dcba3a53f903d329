//! Repository for the `boosts` table.

use paddock_core::catalog::BoostRecord;
use paddock_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use sqlx::PgPool;

use crate::models::boost::{Boost, BoostListParams};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, icon, season, rarity, speed_tier, cornering_tier, \
    power_unit_tier, qualifying_tier, pit_stop_tier, block_tier, overtake_tier, drs_tier, \
    created_at, updated_at";

/// Provides CRUD operations for boosts.
pub struct BoostRepo;

impl BoostRepo {
    /// Insert a new boost. Returns `None` if the id is already taken.
    pub async fn insert(pool: &PgPool, input: &BoostRecord) -> Result<Option<Boost>, sqlx::Error> {
        let query = format!(
            "INSERT INTO boosts \
                (id, name, icon, season, rarity, speed_tier, cornering_tier, power_unit_tier, \
                 qualifying_tier, pit_stop_tier, block_tier, overtake_tier, drs_tier) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             ON CONFLICT (id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Boost>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(input.season)
            .bind(input.rarity)
            .bind(input.speed_tier)
            .bind(input.cornering_tier)
            .bind(input.power_unit_tier)
            .bind(input.qualifying_tier)
            .bind(input.pit_stop_tier)
            .bind(input.block_tier)
            .bind(input.overtake_tier)
            .bind(input.drs_tier)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every catalog field of an existing boost.
    pub async fn update(pool: &PgPool, input: &BoostRecord) -> Result<Option<Boost>, sqlx::Error> {
        let query = format!(
            "UPDATE boosts SET \
                name = $2, icon = $3, season = $4, rarity = $5, speed_tier = $6, \
                cornering_tier = $7, power_unit_tier = $8, qualifying_tier = $9, \
                pit_stop_tier = $10, block_tier = $11, overtake_tier = $12, drs_tier = $13 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Boost>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(input.season)
            .bind(input.rarity)
            .bind(input.speed_tier)
            .bind(input.cornering_tier)
            .bind(input.power_unit_tier)
            .bind(input.qualifying_tier)
            .bind(input.pit_stop_tier)
            .bind(input.block_tier)
            .bind(input.overtake_tier)
            .bind(input.drs_tier)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Boost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boosts WHERE id = $1");
        sqlx::query_as::<_, Boost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_ids(pool: &PgPool, ids: &[String]) -> Result<Vec<Boost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boosts WHERE id = ANY($1)");
        sqlx::query_as::<_, Boost>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List boosts, optionally restricted to one season, highest rarity first.
    pub async fn list(pool: &PgPool, params: &BoostListParams) -> Result<Vec<Boost>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM boosts \
             WHERE ($1::INTEGER IS NULL OR season = $1) \
             ORDER BY rarity DESC, name, id \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Boost>(&query)
            .bind(params.season)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
