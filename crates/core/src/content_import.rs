//! Content-cache import orchestration.
//!
//! Drives one upload through the pipeline for each entity type:
//! season filter, normalization, rarity/series remapping (drivers only),
//! bulk lookup of stored rows, then insert / modify / leave per record.
//!
//! Storage is reached only through [`AssetStore`], so the orchestrator has no
//! database dependency and the caller decides which backend it runs against.
//! The import is best effort: a failed lookup abandons one entity type, a
//! failed write abandons one record, and nothing is retried.

use std::collections::HashMap;
use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{BoostRecord, CarPartRecord, CatalogRecord, DriverRecord};
use crate::changes::detect_changes;
use crate::content_cache::{
    ContentCache, ContentSections, RawAsset, RawBoost, RawCarPart, RawDriver, SeasonFilter,
};
use crate::error::CoreError;
use crate::remap::remap_tiers;

// ── Storage seam ─────────────────────────────────────────────────────

/// Persistence operations the orchestrator needs for one record type.
pub trait AssetStore<R: CatalogRecord>: Send + Sync {
    /// Fetch the stored records whose ids are in `ids`. Unknown ids are
    /// simply absent from the result.
    fn fetch_existing(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<R>, CoreError>> + Send;

    /// Insert a record that does not exist yet.
    fn insert(&self, record: &R) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Overwrite the stored record sharing `record`'s id.
    fn update(&self, record: &R) -> impl Future<Output = Result<(), CoreError>> + Send;
}

// ── Types ────────────────────────────────────────────────────────────

/// Caller-controlled knobs for one import run.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Seasons to import; empty imports everything.
    pub season_filter: SeasonFilter,
    /// Write detected modifications back, or only report them.
    pub allow_modifications: bool,
}

/// A stored record whose incoming version differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifiedItem {
    pub id: String,
    pub name: String,
    /// Names of the differing fields.
    pub changes: Vec<&'static str>,
}

/// Outcome of importing one entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    pub new: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub modified_items: Vec<ModifiedItem>,
}

impl ImportResult {
    /// Records that landed in one of the three counters.
    pub fn processed(&self) -> usize {
        self.new + self.modified + self.unchanged
    }
}

/// Outcome of one content-cache import across all entity types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentImportReport {
    pub drivers: ImportResult,
    pub car_parts: ImportResult,
    pub boosts: ImportResult,
}

/// Totals across the three entity types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub total_new: usize,
    pub total_modified: usize,
    pub total_unchanged: usize,
    pub total_processed: usize,
    /// Whether modifications were written back.
    pub modifications_applied: bool,
    /// Seasons the run was restricted to; empty means all.
    pub season_filter: Vec<i32>,
}

impl ContentImportReport {
    pub fn summary(&self, options: &ImportOptions) -> ImportSummary {
        let results = [&self.drivers, &self.car_parts, &self.boosts];
        ImportSummary {
            total_new: results.iter().map(|r| r.new).sum(),
            total_modified: results.iter().map(|r| r.modified).sum(),
            total_unchanged: results.iter().map(|r| r.unchanged).sum(),
            total_processed: results.iter().map(|r| r.processed()).sum(),
            modifications_applied: options.allow_modifications,
            season_filter: options.season_filter.seasons(),
        }
    }
}

// ── Orchestration ────────────────────────────────────────────────────

/// Import every entity array present in `cache` into `store`.
///
/// Entity types are processed in order (drivers, car parts, boosts); an
/// absent array leaves that type's result at zero.
pub async fn import_content_cache<S>(
    store: &S,
    cache: ContentCache,
    options: &ImportOptions,
) -> ContentImportReport
where
    S: AssetStore<DriverRecord> + AssetStore<CarPartRecord> + AssetStore<BoostRecord>,
{
    tracing::info!(
        shape = %cache.shape,
        seasons = ?options.season_filter.seasons(),
        allow_modifications = options.allow_modifications,
        "Starting content-cache import"
    );

    let ContentSections {
        drivers,
        carparts,
        boosts,
    } = cache.sections;

    let mut report = ContentImportReport::default();

    if let Some(raw) = drivers {
        let records: Vec<DriverRecord> = prepare_records::<RawDriver>(raw, &options.season_filter)
            .into_iter()
            .map(remap_tiers)
            .collect();
        report.drivers = import_records(store, records, options.allow_modifications).await;
    }

    if let Some(raw) = carparts {
        let records = prepare_records::<RawCarPart>(raw, &options.season_filter);
        report.car_parts = import_records(store, records, options.allow_modifications).await;
    }

    if let Some(raw) = boosts {
        let records = prepare_records::<RawBoost>(raw, &options.season_filter);
        report.boosts = import_records(store, records, options.allow_modifications).await;
    }

    report
}

/// Deserialize, season-filter and normalize one raw array.
///
/// Entries that are not valid records of the expected shape, or that carry
/// no id, are logged and dropped.
fn prepare_records<Raw: RawAsset>(raw: Vec<Value>, filter: &SeasonFilter) -> Vec<Raw::Record> {
    let mut records = Vec::with_capacity(raw.len());

    for (index, value) in raw.into_iter().enumerate() {
        let asset: Raw = match serde_json::from_value(value) {
            Ok(asset) => asset,
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed content-cache entry");
                continue;
            }
        };

        if !filter.matches(asset.season()) {
            continue;
        }

        match asset.into_record() {
            Some(record) => records.push(record),
            None => tracing::warn!(index, "Skipping content-cache entry without an id"),
        }
    }

    records
}

/// Classify and persist normalized records of one entity type.
pub async fn import_records<R, S>(
    store: &S,
    records: Vec<R>,
    allow_modifications: bool,
) -> ImportResult
where
    R: CatalogRecord,
    S: AssetStore<R>,
{
    let mut result = ImportResult::default();
    if records.is_empty() {
        return result;
    }

    let ids: Vec<String> = records.iter().map(|r| r.id().to_string()).collect();
    let mut existing: HashMap<String, R> = match store.fetch_existing(&ids).await {
        Ok(rows) => rows
            .into_iter()
            .map(|row| (row.id().to_string(), row))
            .collect(),
        Err(e) => {
            tracing::warn!(
                entity = R::ENTITY,
                error = %e,
                "Failed to fetch existing records, skipping entity type"
            );
            return result;
        }
    };

    for record in records {
        let changes = existing
            .get(record.id())
            .map(|stored| detect_changes(stored, &record));

        match changes {
            None => {
                if let Err(e) = store.insert(&record).await {
                    tracing::warn!(entity = R::ENTITY, id = record.id(), error = %e, "Insert failed");
                    continue;
                }
                result.new += 1;
                // Later duplicates in the same upload compare against this one.
                existing.insert(record.id().to_string(), record);
            }
            Some(changes) if changes.is_empty() => {
                result.unchanged += 1;
            }
            Some(changes) => {
                if allow_modifications {
                    if let Err(e) = store.update(&record).await {
                        tracing::warn!(entity = R::ENTITY, id = record.id(), error = %e, "Update failed");
                        continue;
                    }
                }

                tracing::debug!(entity = R::ENTITY, id = record.id(), ?changes, "Record modified");
                result.modified += 1;
                result.modified_items.push(ModifiedItem {
                    id: record.id().to_string(),
                    name: record.name().to_string(),
                    changes,
                });

                if allow_modifications {
                    existing.insert(record.id().to_string(), record);
                }
            }
        }
    }

    tracing::info!(
        entity = R::ENTITY,
        new = result.new,
        modified = result.modified,
        unchanged = result.unchanged,
        "Imported entity type"
    );

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
