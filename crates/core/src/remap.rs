//! Rarity and series remapping applied to imported assets.
//!
//! The content cache reports "Special Edition Turbo" drivers with the same
//! rarity as ordinary special editions and carries a raw series number for
//! high-rarity assets that does not reflect their Grand Prix progression.
//! Both are corrected here, in order: rarity first, then series, because the
//! series decision depends on the final rarity.

// ── Constants ────────────────────────────────────────────────────────

/// Rarity of a Special Edition asset as reported by the content cache.
pub const RARITY_SPECIAL_EDITION: i32 = 5;

/// Rarity assigned to Special Edition Turbo drivers.
pub const RARITY_SPECIAL_EDITION_TURBO: i32 = 6;

/// Lowest rarity (legendary) whose series is derived from the GP tier.
pub const SERIES_REMAP_MIN_RARITY: i32 = 4;

/// Collection sub-name suffix marking a Special Edition Turbo variant.
pub const TURBO_SUB_NAME_SUFFIX: &str = "SUBTITLE_2";

/// Series used when the minimum GP tier is unknown.
pub const DEFAULT_TIER_SERIES: i32 = 3;

// ── Types ────────────────────────────────────────────────────────────

/// An asset with a rarity tier and a series, as seen by the remappers.
pub trait TieredAsset {
    fn rarity(&self) -> i32;
    fn set_rarity(&mut self, rarity: i32);
    fn series(&self) -> i32;
    fn set_series(&mut self, series: i32);
    fn min_gp_tier(&self) -> Option<i32>;

    /// Variant tag; assets without one never qualify as SE Turbo.
    fn collection_sub_name(&self) -> Option<&str> {
        None
    }
}

// ── Pure Functions ───────────────────────────────────────────────────

/// Whether the asset is a Special Edition Turbo variant in its source form.
pub fn is_special_edition_turbo<A: TieredAsset>(asset: &A) -> bool {
    asset.rarity() == RARITY_SPECIAL_EDITION
        && asset
            .collection_sub_name()
            .is_some_and(|sub| sub.ends_with(TURBO_SUB_NAME_SUFFIX))
}

/// Promote Special Edition Turbo assets to [`RARITY_SPECIAL_EDITION_TURBO`].
///
/// Only rarity 5 is ever promoted, so applying this twice is a no-op.
pub fn remap_rarity<A: TieredAsset>(mut asset: A) -> A {
    if is_special_edition_turbo(&asset) {
        asset.set_rarity(RARITY_SPECIAL_EDITION_TURBO);
    }
    asset
}

/// Series for a minimum GP tier: 0→3, 1→6, 2→9, 3 and above→12.
///
/// Absent or negative tiers fall back to [`DEFAULT_TIER_SERIES`].
pub fn series_for_tier(min_gp_tier: Option<i32>) -> i32 {
    match min_gp_tier {
        Some(0) => 3,
        Some(1) => 6,
        Some(2) => 9,
        Some(tier) if tier >= 3 => 12,
        _ => DEFAULT_TIER_SERIES,
    }
}

/// Replace the series of rarity ≥ 4 assets with the tier-derived value.
///
/// Lower rarities keep their source series untouched.
pub fn remap_series<A: TieredAsset>(mut asset: A) -> A {
    if asset.rarity() >= SERIES_REMAP_MIN_RARITY {
        asset.set_series(series_for_tier(asset.min_gp_tier()));
    }
    asset
}

/// Apply [`remap_rarity`] then [`remap_series`].
pub fn remap_tiers<A: TieredAsset>(asset: A) -> A {
    remap_series(remap_rarity(asset))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
