//! Integration tests running the content-cache import against PostgreSQL
//! through [`PgCatalogStore`].

use assert_matches::assert_matches;
use paddock_core::catalog::DriverRecord;
use paddock_core::content_cache::{ContentCache, SeasonFilter};
use paddock_core::content_import::{import_content_cache, AssetStore, ImportOptions};
use paddock_core::error::CoreError;
use paddock_db::repositories::{BoostRepo, CarPartRepo, DriverRepo};
use paddock_db::PgCatalogStore;
use serde_json::json;
use sqlx::PgPool;

fn content_cache() -> ContentCache {
    ContentCache::from_value(json!({
        "_contentResponse": {
            "drivers": [
                { "id": "d1", "name": "Turbo", "rarity": 5, "series": 1,
                  "collectionSubName": "DRIVER_SE_SUBTITLE_2", "minGpTier": 2, "season": 6,
                  "stats": [{ "level": 1, "overtaking": 20 }] },
                { "id": "d2", "name": "Rookie", "rarity": 2, "series": 5, "minGpTier": 1, "season": 6 },
                { "id": "d3", "name": "Old Timer", "rarity": 3, "series": 2, "season": 5 }
            ],
            "carparts": [
                { "id": "p1", "name": "Front Wing", "rarity": 1, "series": 2, "carPartType": 2, "season": 6 }
            ],
            "boosts": [
                { "id": "b1", "name": "BOOST_NAME_TURBO", "speedTier": 4, "season": 6 }
            ]
        }
    }))
    .unwrap()
}

fn allow_modifications() -> ImportOptions {
    ImportOptions {
        season_filter: SeasonFilter::default(),
        allow_modifications: true,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn import_persists_remapped_records(pool: PgPool) {
    let store = PgCatalogStore::new(pool.clone());
    let report = import_content_cache(&store, content_cache(), &allow_modifications()).await;

    assert_eq!(report.drivers.new, 3);
    assert_eq!(report.car_parts.new, 1);
    assert_eq!(report.boosts.new, 1);

    let turbo = DriverRepo::find_by_id(&pool, "d1").await.unwrap().unwrap();
    assert_eq!((turbo.rarity, turbo.series), (6, 9));
    let rookie = DriverRepo::find_by_id(&pool, "d2").await.unwrap().unwrap();
    assert_eq!((rookie.rarity, rookie.series), (2, 5));

    let boost = BoostRepo::find_by_id(&pool, "b1").await.unwrap().unwrap();
    assert_eq!(boost.name, "Boost TURBO");
    assert!(CarPartRepo::find_by_id(&pool, "p1").await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn second_import_is_unchanged(pool: PgPool) {
    let store = PgCatalogStore::new(pool);
    import_content_cache(&store, content_cache(), &allow_modifications()).await;
    let report = import_content_cache(&store, content_cache(), &allow_modifications()).await;

    let summary = report.summary(&allow_modifications());
    assert_eq!(summary.total_new, 0);
    assert_eq!(summary.total_modified, 0);
    assert_eq!(summary.total_unchanged, 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn season_filter_and_report_only_mode(pool: PgPool) {
    let store = PgCatalogStore::new(pool.clone());
    let options = ImportOptions {
        season_filter: SeasonFilter::new([6]),
        allow_modifications: false,
    };
    let report = import_content_cache(&store, content_cache(), &options).await;
    assert_eq!(report.drivers.new, 2);
    assert!(DriverRepo::find_by_id(&pool, "d3").await.unwrap().is_none());

    let mut changed = DriverRepo::find_by_id(&pool, "d2")
        .await
        .unwrap()
        .map(DriverRecord::from)
        .unwrap();
    changed.price = 999;
    AssetStore::<DriverRecord>::update(&store, &changed).await.unwrap();

    let report = import_content_cache(&store, content_cache(), &options).await;
    assert_eq!(report.drivers.modified, 1);
    assert_eq!(report.drivers.modified_items[0].id, "d2");
    assert_eq!(report.drivers.modified_items[0].changes, vec!["price"]);

    let stored = DriverRepo::find_by_id(&pool, "d2").await.unwrap().unwrap();
    assert_eq!(stored.price, 999);
}

#[sqlx::test(migrations = "./migrations")]
async fn store_reports_conflicts_and_missing_rows(pool: PgPool) {
    let store = PgCatalogStore::new(pool);
    let record = DriverRecord {
        id: "solo".to_string(),
        name: "Solo".to_string(),
        rarity: 1,
        series: 1,
        season: None,
        collection_sub_name: None,
        min_gp_tier: None,
        icon: None,
        price: 0,
        duplicate_unlock_count: 0,
        stats: json!([]),
    };

    assert_matches!(
        AssetStore::<DriverRecord>::update(&store, &record).await,
        Err(CoreError::NotFound { .. })
    );
    AssetStore::<DriverRecord>::insert(&store, &record).await.unwrap();
    assert_matches!(
        AssetStore::<DriverRecord>::insert(&store, &record).await,
        Err(CoreError::Conflict(_))
    );
}
