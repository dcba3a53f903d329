//! PostgreSQL backend for the content-cache import pipeline.

use paddock_core::catalog::{
    BoostRecord, CarPartRecord, DriverRecord, ENTITY_BOOST, ENTITY_CAR_PART, ENTITY_DRIVER,
};
use paddock_core::content_import::AssetStore;
use paddock_core::error::CoreError;

use crate::repositories::{BoostRepo, CarPartRepo, DriverRepo};
use crate::DbPool;

/// [`AssetStore`] over the catalog repositories.
///
/// Constructed by the request handler from the shared pool and handed to
/// the orchestrator for the duration of one import.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn db_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("Database error: {err}"))
}

fn already_exists(entity: &str, id: &str) -> CoreError {
    CoreError::Conflict(format!("{entity} {id} already exists"))
}

impl AssetStore<DriverRecord> for PgCatalogStore {
    async fn fetch_existing(&self, ids: &[String]) -> Result<Vec<DriverRecord>, CoreError> {
        let rows = DriverRepo::find_by_ids(&self.pool, ids)
            .await
            .map_err(db_error)?;
        Ok(rows.into_iter().map(DriverRecord::from).collect())
    }

    async fn insert(&self, record: &DriverRecord) -> Result<(), CoreError> {
        DriverRepo::insert(&self.pool, record)
            .await
            .map_err(db_error)?
            .map(|_| ())
            .ok_or_else(|| already_exists(ENTITY_DRIVER, &record.id))
    }

    async fn update(&self, record: &DriverRecord) -> Result<(), CoreError> {
        DriverRepo::update(&self.pool, record)
            .await
            .map_err(db_error)?
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound {
                entity: ENTITY_DRIVER,
                id: record.id.clone(),
            })
    }
}

impl AssetStore<CarPartRecord> for PgCatalogStore {
    async fn fetch_existing(&self, ids: &[String]) -> Result<Vec<CarPartRecord>, CoreError> {
        let rows = CarPartRepo::find_by_ids(&self.pool, ids)
            .await
            .map_err(db_error)?;
        Ok(rows.into_iter().map(CarPartRecord::from).collect())
    }

    async fn insert(&self, record: &CarPartRecord) -> Result<(), CoreError> {
        CarPartRepo::insert(&self.pool, record)
            .await
            .map_err(db_error)?
            .map(|_| ())
            .ok_or_else(|| already_exists(ENTITY_CAR_PART, &record.id))
    }

    async fn update(&self, record: &CarPartRecord) -> Result<(), CoreError> {
        CarPartRepo::update(&self.pool, record)
            .await
            .map_err(db_error)?
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound {
                entity: ENTITY_CAR_PART,
                id: record.id.clone(),
            })
    }
}

impl AssetStore<BoostRecord> for PgCatalogStore {
    async fn fetch_existing(&self, ids: &[String]) -> Result<Vec<BoostRecord>, CoreError> {
        let rows = BoostRepo::find_by_ids(&self.pool, ids)
            .await
            .map_err(db_error)?;
        Ok(rows.into_iter().map(BoostRecord::from).collect())
    }

    async fn insert(&self, record: &BoostRecord) -> Result<(), CoreError> {
        BoostRepo::insert(&self.pool, record)
            .await
            .map_err(db_error)?
            .map(|_| ())
            .ok_or_else(|| already_exists(ENTITY_BOOST, &record.id))
    }

    async fn update(&self, record: &BoostRecord) -> Result<(), CoreError> {
        BoostRepo::update(&self.pool, record)
            .await
            .map_err(db_error)?
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound {
                entity: ENTITY_BOOST,
                id: record.id.clone(),
            })
    }
}
