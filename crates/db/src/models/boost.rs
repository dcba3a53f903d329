//! Boost entity model.

use paddock_core::catalog::BoostRecord;
use paddock_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `boosts` table. `name` holds the display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Boost {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub season: Option<i32>,
    pub rarity: i32,
    pub speed_tier: i32,
    pub cornering_tier: i32,
    pub power_unit_tier: i32,
    pub qualifying_tier: i32,
    pub pit_stop_tier: i32,
    pub block_tier: i32,
    pub overtake_tier: i32,
    pub drs_tier: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Boost> for BoostRecord {
    fn from(row: Boost) -> Self {
        Self {
            id: row.id,
            name: row.name,
            icon: row.icon,
            season: row.season,
            rarity: row.rarity,
            speed_tier: row.speed_tier,
            cornering_tier: row.cornering_tier,
            power_unit_tier: row.power_unit_tier,
            qualifying_tier: row.qualifying_tier,
            pit_stop_tier: row.pit_stop_tier,
            block_tier: row.block_tier,
            overtake_tier: row.overtake_tier,
            drs_tier: row.drs_tier,
        }
    }
}

/// Query parameters for `GET /boosts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoostListParams {
    pub season: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
