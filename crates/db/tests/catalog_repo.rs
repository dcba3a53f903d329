//! Integration tests for the catalog repositories.
//!
//! Exercises insert / update / lookup / listing against a real database.

use paddock_core::catalog::{BoostRecord, CarPartRecord, DriverRecord};
use paddock_db::models::boost::BoostListParams;
use paddock_db::models::car_part::CarPartListParams;
use paddock_db::models::driver::DriverListParams;
use paddock_db::repositories::{BoostRepo, CarPartRepo, DriverRepo};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_driver(id: &str, name: &str, rarity: i32, season: Option<i32>) -> DriverRecord {
    DriverRecord {
        id: id.to_string(),
        name: name.to_string(),
        rarity,
        series: 3,
        season,
        collection_sub_name: None,
        min_gp_tier: Some(0),
        icon: Some(format!("icon_{id}")),
        price: 250,
        duplicate_unlock_count: 5,
        stats: json!([{ "level": 1, "overtaking": 9 }]),
    }
}

fn new_car_part(id: &str, car_part_type: i32) -> CarPartRecord {
    CarPartRecord {
        id: id.to_string(),
        name: format!("Part {id}"),
        rarity: 2,
        series: 4,
        season: Some(6),
        car_part_type,
        min_gp_tier: None,
        icon: None,
        price: 0,
        duplicate_unlock_count: 0,
        stats: json!([]),
    }
}

fn new_boost(id: &str, season: Option<i32>) -> BoostRecord {
    BoostRecord {
        id: id.to_string(),
        name: "Boost TURBO".to_string(),
        icon: None,
        season,
        rarity: 1,
        speed_tier: 3,
        cornering_tier: 0,
        power_unit_tier: 0,
        qualifying_tier: 0,
        pit_stop_tier: 0,
        block_tier: 1,
        overtake_tier: 0,
        drs_tier: 0,
    }
}

// ---------------------------------------------------------------------------
// Drivers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn driver_insert_and_find(pool: PgPool) {
    let input = new_driver("d1", "Alpha", 3, Some(6));
    let row = DriverRepo::insert(&pool, &input)
        .await
        .unwrap()
        .expect("insert should create a row");

    assert_eq!(row.id, "d1");
    assert_eq!(row.stats, json!([{ "level": 1, "overtaking": 9 }]));

    let found = DriverRepo::find_by_id(&pool, "d1").await.unwrap().unwrap();
    assert_eq!(DriverRecord::from(found), input);
}

#[sqlx::test(migrations = "./migrations")]
async fn driver_duplicate_insert_returns_none(pool: PgPool) {
    DriverRepo::insert(&pool, &new_driver("d1", "Alpha", 3, None))
        .await
        .unwrap();
    let second = DriverRepo::insert(&pool, &new_driver("d1", "Other", 1, None))
        .await
        .unwrap();

    assert!(second.is_none());
    let stored = DriverRepo::find_by_id(&pool, "d1").await.unwrap().unwrap();
    assert_eq!(stored.name, "Alpha");
}

#[sqlx::test(migrations = "./migrations")]
async fn driver_update_overwrites_fields_and_bumps_updated_at(pool: PgPool) {
    let created = DriverRepo::insert(&pool, &new_driver("d1", "Alpha", 3, None))
        .await
        .unwrap()
        .unwrap();

    let mut changed = new_driver("d1", "Alpha Prime", 4, Some(7));
    changed.collection_sub_name = Some("SE_SUBTITLE_1".to_string());
    let updated = DriverRepo::update(&pool, &changed).await.unwrap().unwrap();

    assert_eq!(updated.name, "Alpha Prime");
    assert_eq!(updated.rarity, 4);
    assert_eq!(updated.season, Some(7));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn driver_update_missing_returns_none(pool: PgPool) {
    let result = DriverRepo::update(&pool, &new_driver("ghost", "Ghost", 1, None))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn driver_find_by_ids_skips_unknown(pool: PgPool) {
    for id in ["a", "b", "c"] {
        DriverRepo::insert(&pool, &new_driver(id, id, 1, None))
            .await
            .unwrap();
    }

    let ids = vec!["a".to_string(), "c".to_string(), "zzz".to_string()];
    let mut rows = DriverRepo::find_by_ids(&pool, &ids).await.unwrap();
    rows.sort_by(|a, b| a.id.cmp(&b.id));

    let found: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(found, vec!["a", "c"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn driver_list_filters_and_orders(pool: PgPool) {
    DriverRepo::insert(&pool, &new_driver("d1", "Bravo", 2, Some(6))).await.unwrap();
    DriverRepo::insert(&pool, &new_driver("d2", "Alpha", 2, Some(6))).await.unwrap();
    DriverRepo::insert(&pool, &new_driver("d3", "Zulu", 5, Some(6))).await.unwrap();
    DriverRepo::insert(&pool, &new_driver("d4", "Echo", 5, Some(5))).await.unwrap();

    let season_six = DriverRepo::list(
        &pool,
        &DriverListParams {
            season: Some(6),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let names: Vec<&str> = season_six.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Zulu", "Alpha", "Bravo"]);

    let legendary = DriverRepo::list(
        &pool,
        &DriverListParams {
            rarity: Some(5),
            limit: Some(1),
            offset: Some(1),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(legendary.len(), 1);
    assert_eq!(legendary[0].name, "Zulu");
}

// ---------------------------------------------------------------------------
// Car parts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn car_part_roundtrip_and_type_filter(pool: PgPool) {
    CarPartRepo::insert(&pool, &new_car_part("p1", 1)).await.unwrap();
    CarPartRepo::insert(&pool, &new_car_part("p2", 2)).await.unwrap();

    let brakes = CarPartRepo::list(
        &pool,
        &CarPartListParams {
            car_part_type: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(brakes.len(), 1);
    assert_eq!(brakes[0].id, "p2");

    let mut changed = new_car_part("p1", 1);
    changed.series = 12;
    let updated = CarPartRepo::update(&pool, &changed).await.unwrap().unwrap();
    assert_eq!(updated.series, 12);
}

// ---------------------------------------------------------------------------
// Boosts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn boost_roundtrip_and_season_filter(pool: PgPool) {
    BoostRepo::insert(&pool, &new_boost("b1", Some(6))).await.unwrap();
    BoostRepo::insert(&pool, &new_boost("b2", None)).await.unwrap();

    let all = BoostRepo::list(&pool, &BoostListParams::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let season_six = BoostRepo::list(
        &pool,
        &BoostListParams {
            season: Some(6),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(season_six.len(), 1);
    assert_eq!(season_six[0].id, "b1");

    let found = BoostRepo::find_by_id(&pool, "b1").await.unwrap().unwrap();
    assert_eq!(BoostRecord::from(found), new_boost("b1", Some(6)));
}
