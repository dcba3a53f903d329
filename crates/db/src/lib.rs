//! PostgreSQL persistence for the Paddock catalog.
//!
//! - [`models`] -- row structs and list parameters.
//! - [`repositories`] -- zero-sized repositories with async queries.
//! - [`catalog_store`] -- [`PgCatalogStore`], the import pipeline's storage backend.

use sqlx::postgres::PgPoolOptions;

pub mod catalog_store;
pub mod models;
pub mod repositories;

pub use catalog_store::PgCatalogStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
