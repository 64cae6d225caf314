//! Idempotent creation of the `products` table at startup.
//!
//! Runs the same DDL as the migration so a fresh database works without the
//! diesel CLI. The statement uses `IF NOT EXISTS` and is safe to repeat.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::pool::{DbPool, PoolError};

const CREATE_PRODUCTS_TABLE: &str =
    include_str!("../../../migrations/2025-06-01-000000_create_products/up.sql");

/// Errors raised while bootstrapping the schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaBootstrapError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("failed to create products table: {0}")]
    Execute(#[from] diesel::result::Error),
}

/// Ensure the `products` table exists.
///
/// # Errors
///
/// Fails when no connection can be checked out or the DDL is rejected.
pub async fn apply_schema(pool: &DbPool) -> Result<(), SchemaBootstrapError> {
    let mut conn = pool.get().await?;
    diesel::sql_query(CREATE_PRODUCTS_TABLE)
        .execute(&mut conn)
        .await?;
    info!("products schema ready");
    Ok(())
}
