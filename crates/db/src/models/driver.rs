//! Driver entity model.

use paddock_core::catalog::DriverRecord;
use paddock_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `drivers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season: Option<i32>,
    pub collection_sub_name: Option<String>,
    pub min_gp_tier: Option<i32>,
    pub icon: Option<String>,
    pub price: i64,
    pub duplicate_unlock_count: i32,
    pub stats: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Driver> for DriverRecord {
    fn from(row: Driver) -> Self {
        Self {
            id: row.id,
            name: row.name,
            rarity: row.rarity,
            series: row.series,
            season: row.season,
            collection_sub_name: row.collection_sub_name,
            min_gp_tier: row.min_gp_tier,
            icon: row.icon,
            price: row.price,
            duplicate_unlock_count: row.duplicate_unlock_count,
            stats: row.stats,
        }
    }
}

/// Query parameters for `GET /drivers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverListParams {
    pub rarity: Option<i32>,
    pub series: Option<i32>,
    pub season: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
