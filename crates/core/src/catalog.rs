//! Canonical catalog records for drivers, car parts and boosts.
//!
//! These are the normalized, snake_case shapes that the import pipeline
//! produces from the game's content cache and compares against what is
//! already stored. The database row types in `paddock-db` carry the same
//! fields plus bookkeeping timestamps.

use serde::{Deserialize, Serialize};

use crate::changes::{change_tracked, ChangeTracked};
use crate::remap::TieredAsset;
use crate::types::AssetId;

// ── Entity names ─────────────────────────────────────────────────────

pub const ENTITY_DRIVER: &str = "driver";
pub const ENTITY_CAR_PART: &str = "car_part";
pub const ENTITY_BOOST: &str = "boost";

// ── Records ──────────────────────────────────────────────────────────

/// Common accessors used by the import orchestrator.
pub trait CatalogRecord: ChangeTracked + Clone + Send + Sync {
    /// Entity name used in logs and error messages.
    const ENTITY: &'static str;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// A driver as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub id: AssetId,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season: Option<i32>,
    pub collection_sub_name: Option<String>,
    pub min_gp_tier: Option<i32>,
    pub icon: Option<String>,
    pub price: i64,
    pub duplicate_unlock_count: i32,
    /// Per-level stat blocks, kept verbatim from the content cache.
    pub stats: serde_json::Value,
}

/// A car part as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarPartRecord {
    pub id: AssetId,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season: Option<i32>,
    pub car_part_type: i32,
    pub min_gp_tier: Option<i32>,
    pub icon: Option<String>,
    pub price: i64,
    pub duplicate_unlock_count: i32,
    pub stats: serde_json::Value,
}

/// A boost as stored in the catalog. `name` is already display-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostRecord {
    pub id: AssetId,
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
}

// The identifier is the comparison key, not a compared field.
change_tracked!(DriverRecord {
    name,
    rarity,
    series,
    season,
    collection_sub_name,
    min_gp_tier,
    icon,
    price,
    duplicate_unlock_count,
    stats,
});

change_tracked!(CarPartRecord {
    name,
    rarity,
    series,
    season,
    car_part_type,
    min_gp_tier,
    icon,
    price,
    duplicate_unlock_count,
    stats,
});

change_tracked!(BoostRecord {
    name,
    icon,
    season,
    rarity,
    speed_tier,
    cornering_tier,
    power_unit_tier,
    qualifying_tier,
    pit_stop_tier,
    block_tier,
    overtake_tier,
    drs_tier,
});

impl CatalogRecord for DriverRecord {
    const ENTITY: &'static str = ENTITY_DRIVER;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for CarPartRecord {
    const ENTITY: &'static str = ENTITY_CAR_PART;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for BoostRecord {
    const ENTITY: &'static str = ENTITY_BOOST;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TieredAsset for DriverRecord {
    fn rarity(&self) -> i32 {
        self.rarity
    }

    fn set_rarity(&mut self, rarity: i32) {
        self.rarity = rarity;
    }

    fn series(&self) -> i32 {
        self.series
    }

    fn set_series(&mut self, series: i32) {
        self.series = series;
    }

    fn min_gp_tier(&self) -> Option<i32> {
        self.min_gp_tier
    }

    fn collection_sub_name(&self) -> Option<&str> {
        self.collection_sub_name.as_deref()
    }
}

impl TieredAsset for CarPartRecord {
    fn rarity(&self) -> i32 {
        self.rarity
    }

    fn set_rarity(&mut self, rarity: i32) {
        self.rarity = rarity;
    }

    fn series(&self) -> i32 {
        self.series
    }

    fn set_series(&mut self, series: i32) {
        self.series = series;
    }

    fn min_gp_tier(&self) -> Option<i32> {
        self.min_gp_tier
    }
}
