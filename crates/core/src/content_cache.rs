//! Parsing and normalization of the game's content-cache export.
//!
//! The export arrives either wrapped in a `_contentResponse` object or with
//! its arrays at the top level. [`ContentCache::from_slice`] resolves the two
//! shapes once, preferring the wrapped array for each entity type, and
//! [`RawDriver::into_record`] and friends turn the external camelCase
//! records into the canonical catalog records with explicit defaults.

use std::collections::BTreeSet;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::catalog::{BoostRecord, CarPartRecord, DriverRecord};
use crate::error::CoreError;

// ── Constants ────────────────────────────────────────────────────────

/// Localization prefix carried by raw boost names.
pub const BOOST_NAME_PREFIX: &str = "BOOST_NAME_";

// ── Payload ──────────────────────────────────────────────────────────

/// Which layout the uploaded document used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// Arrays nested under `_contentResponse`.
    Wrapped,
    /// Arrays at the top level.
    Unwrapped,
}

impl PayloadShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrapped => "wrapped",
            Self::Unwrapped => "unwrapped",
        }
    }
}

impl std::fmt::Display for PayloadShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The entity arrays of a content cache. `None` means the array is absent.
#[derive(Debug, Default)]
pub struct ContentSections {
    pub drivers: Option<Vec<Value>>,
    pub carparts: Option<Vec<Value>>,
    pub boosts: Option<Vec<Value>>,
}

/// Arrays as spelled in one object. Car parts appear as `carparts` or
/// `carParts`; when both are present `carparts` is used.
#[derive(Debug, Default, Deserialize)]
struct RawSections {
    #[serde(default)]
    drivers: Option<Vec<Value>>,
    #[serde(default)]
    carparts: Option<Vec<Value>>,
    #[serde(default, rename = "carParts")]
    car_parts: Option<Vec<Value>>,
    #[serde(default)]
    boosts: Option<Vec<Value>>,
}

impl From<RawSections> for ContentSections {
    fn from(raw: RawSections) -> Self {
        Self {
            drivers: raw.drivers,
            carparts: raw.carparts.or(raw.car_parts),
            boosts: raw.boosts,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "_contentResponse", default)]
    wrapped: Option<RawSections>,
    #[serde(flatten)]
    unwrapped: RawSections,
}

/// A resolved content cache: one canonical set of arrays.
#[derive(Debug)]
pub struct ContentCache {
    pub shape: PayloadShape,
    pub sections: ContentSections,
}

impl ContentCache {
    /// Parse an uploaded document.
    ///
    /// Fails with [`CoreError::Validation`] when the bytes are not JSON, the
    /// document is not an object, or an entity array has the wrong type.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| CoreError::Validation(format!("Invalid JSON: {e}")))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        if !value.is_object() {
            return Err(CoreError::Validation(
                "Content cache must be a JSON object".to_string(),
            ));
        }

        let envelope: Envelope = serde_json::from_value(value)
            .map_err(|e| CoreError::Validation(format!("Malformed content cache: {e}")))?;

        let shape = if envelope.wrapped.is_some() {
            PayloadShape::Wrapped
        } else {
            PayloadShape::Unwrapped
        };

        let wrapped = ContentSections::from(envelope.wrapped.unwrap_or_default());
        let unwrapped = ContentSections::from(envelope.unwrapped);

        Ok(Self {
            shape,
            sections: ContentSections {
                drivers: wrapped.drivers.or(unwrapped.drivers),
                carparts: wrapped.carparts.or(unwrapped.carparts),
                boosts: wrapped.boosts.or(unwrapped.boosts),
            },
        })
    }
}

// ── Season filter ────────────────────────────────────────────────────

/// Set of seasons to import. An empty filter imports everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonFilter(BTreeSet<i32>);

impl SeasonFilter {
    pub fn new(seasons: impl IntoIterator<Item = i32>) -> Self {
        Self(seasons.into_iter().collect())
    }

    /// Parse a comma-separated list such as `"6, 7"`. Blank items are ignored.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i32>().map_err(|_| {
                    CoreError::Validation(format!("Invalid season number in season_filter: '{s}'"))
                })
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a record from `season` passes. Unknown seasons only pass an
    /// empty filter.
    pub fn matches(&self, season: Option<i32>) -> bool {
        self.0.is_empty() || season.is_some_and(|s| self.0.contains(&s))
    }

    /// Seasons in ascending order.
    pub fn seasons(&self) -> Vec<i32> {
        self.0.iter().copied().collect()
    }
}

// ── Raw records ──────────────────────────────────────────────────────

/// A driver in the content cache's own naming.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDriver {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub rarity: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub series: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub season: Option<i32>,
    pub collection_sub_name: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub min_gp_tier: Option<i32>,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub duplicate_unlock_count: Option<i32>,
    pub stats: Option<Value>,
}

/// A car part in the content cache's own naming.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCarPart {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub rarity: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub series: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub season: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub car_part_type: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub min_gp_tier: Option<i32>,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub duplicate_unlock_count: Option<i32>,
    pub stats: Option<Value>,
}

/// A boost in the content cache's own naming.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBoost {
    pub id: Option<String>,
    pub name: Option<String>,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub season: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub rarity: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub speed_tier: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub cornering_tier: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub power_unit_tier: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub qualifying_tier: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub pit_stop_tier: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub block_tier: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub overtake_tier: Option<i32>,
    #[serde(default, deserialize_with = "whole_number")]
    pub drs_tier: Option<i32>,
}

/// A raw record that can be season-filtered and normalized.
pub trait RawAsset: DeserializeOwned {
    type Record;

    fn season(&self) -> Option<i32>;

    /// Normalize into the canonical record. `None` when the record has no
    /// usable identifier.
    fn into_record(self) -> Option<Self::Record>;
}

/// Accept integers written in float form (`100.0`) as well as plain ones.
/// Fractional or out-of-range values are still rejected.
fn whole_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let whole = number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    });

    whole
        .and_then(|n| T::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected a whole number, found {number}")))
}

fn non_empty_id(id: Option<String>) -> Option<String> {
    id.filter(|id| !id.trim().is_empty())
}

fn stats_or_empty(stats: Option<Value>) -> Value {
    match stats {
        Some(Value::Null) | None => Value::Array(Vec::new()),
        Some(stats) => stats,
    }
}

impl RawAsset for RawDriver {
    type Record = DriverRecord;

    fn season(&self) -> Option<i32> {
        self.season
    }

    fn into_record(self) -> Option<DriverRecord> {
        Some(DriverRecord {
            id: non_empty_id(self.id)?,
            name: self.name.unwrap_or_default(),
            rarity: self.rarity.unwrap_or(0),
            series: self.series.unwrap_or(0),
            season: self.season,
            collection_sub_name: self.collection_sub_name,
            min_gp_tier: self.min_gp_tier,
            icon: self.icon,
            price: self.price.unwrap_or(0),
            duplicate_unlock_count: self.duplicate_unlock_count.unwrap_or(0),
            stats: stats_or_empty(self.stats),
        })
    }
}

impl RawAsset for RawCarPart {
    type Record = CarPartRecord;

    fn season(&self) -> Option<i32> {
        self.season
    }

    fn into_record(self) -> Option<CarPartRecord> {
        Some(CarPartRecord {
            id: non_empty_id(self.id)?,
            name: self.name.unwrap_or_default(),
            rarity: self.rarity.unwrap_or(0),
            series: self.series.unwrap_or(0),
            season: self.season,
            car_part_type: self.car_part_type.unwrap_or(0),
            min_gp_tier: self.min_gp_tier,
            icon: self.icon,
            price: self.price.unwrap_or(0),
            duplicate_unlock_count: self.duplicate_unlock_count.unwrap_or(0),
            stats: stats_or_empty(self.stats),
        })
    }
}

impl RawAsset for RawBoost {
    type Record = BoostRecord;

    fn season(&self) -> Option<i32> {
        self.season
    }

    fn into_record(self) -> Option<BoostRecord> {
        Some(BoostRecord {
            id: non_empty_id(self.id)?,
            name: format_boost_name(self.name.as_deref().unwrap_or_default()),
            icon: self.icon,
            season: self.season,
            rarity: self.rarity.unwrap_or(0),
            speed_tier: self.speed_tier.unwrap_or(0),
            cornering_tier: self.cornering_tier.unwrap_or(0),
            power_unit_tier: self.power_unit_tier.unwrap_or(0),
            qualifying_tier: self.qualifying_tier.unwrap_or(0),
            pit_stop_tier: self.pit_stop_tier.unwrap_or(0),
            block_tier: self.block_tier.unwrap_or(0),
            overtake_tier: self.overtake_tier.unwrap_or(0),
            drs_tier: self.drs_tier.unwrap_or(0),
        })
    }
}

/// Turn a boost localization key into its display name.
///
/// `BOOST_NAME_TURBO` becomes `Boost TURBO`; remaining underscores become
/// spaces. Names without the prefix are returned unchanged.
pub fn format_boost_name(raw: &str) -> String {
    match raw.strip_prefix(BOOST_NAME_PREFIX) {
        Some(rest) => format!("Boost {}", rest.replace('_', " ")),
        None => raw.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
