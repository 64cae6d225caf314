//! PostgreSQL-backed `ProductRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductChanges, ProductDraft, ProductId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error, map_write_error};
use super::models::{NewProductRow, ProductChangeset, ProductRow};
use super::pool::DbPool;
use super::schema::products;

/// Diesel-backed implementation of the [`ProductRepository`] port.
///
/// Every statement checks out its own pooled connection; there is no
/// transaction spanning calls.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let fields = draft.fields();
        let row = NewProductRow::new(*ProductId::random().as_uuid(), fields, Utc::now());

        let stored: ProductRow = diesel::insert_into(products::table)
            .values(&row)
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_write_error(err, fields.name()))?;

        Ok(stored.into())
    }

    async fn list(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProductRow> = products::table
            .order((products::created_at.asc(), products::id.asc()))
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProductRow> = products::table
            .find(*id.as_uuid())
            .select(ProductRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Product::from))
    }

    async fn update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let fields = changes.fields();
        let changeset = ProductChangeset::new(fields, Utc::now());

        let row: Option<ProductRow> = diesel::update(products::table.find(*id.as_uuid()))
            .set(&changeset)
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_write_error(err, fields.name()))?;

        Ok(row.map(Product::from))
    }

    async fn delete(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProductRow> = diesel::delete(products::table.find(*id.as_uuid()))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Product::from))
    }
}
