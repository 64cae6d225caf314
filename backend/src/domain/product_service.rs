//! Product catalogue domain service.
//!
//! Implements the product driving ports on top of a [`ProductRepository`],
//! turning storage outcomes into the domain error taxonomy: a taken name is a
//! `conflict`, a missing product is `not_found`, and anything else is an
//! internal failure whose raw cause is only exposed outside production.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, warn};

use crate::domain::ports::{
    ProductCommand, ProductQuery, ProductRepository, ProductRepositoryError,
};
use crate::domain::{Error, ErrorCode, Product, ProductChanges, ProductDraft, ProductId};

/// Whether raw storage failures may be echoed back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorExposure {
    /// Internal failures carry a generic message only.
    Production,
    /// Internal failures include the raw cause under `details.cause`.
    Development,
}

impl ErrorExposure {
    /// Map the deployment's production flag onto an exposure mode.
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// Product service implementing [`ProductCommand`] and [`ProductQuery`].
#[derive(Clone)]
pub struct ProductService<R> {
    repo: Arc<R>,
    exposure: ErrorExposure,
}

impl<R> ProductService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>, exposure: ErrorExposure) -> Self {
        Self { repo, exposure }
    }
}

pub(crate) fn product_not_found(id: &ProductId) -> Error {
    Error::not_found(format!("product {id} not found")).with_details(json!({
        "id": id.to_string(),
        "code": "product_not_found",
    }))
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    fn map_repository_error(&self, error: ProductRepositoryError) -> Error {
        match error {
            ProductRepositoryError::DuplicateName { name } => {
                Error::conflict(format!("a product named '{name}' already exists")).with_details(
                    json!({
                        "field": "name",
                        "code": "duplicate_name",
                    }),
                )
            }
            ProductRepositoryError::Connection { message } => self.internal_failure(
                ErrorCode::ServiceUnavailable,
                "product storage is unavailable",
                message,
            ),
            ProductRepositoryError::Query { message } => {
                self.internal_failure(ErrorCode::InternalError, "product storage error", message)
            }
        }
    }

    fn internal_failure(&self, code: ErrorCode, public_message: &str, cause: String) -> Error {
        error!(?code, %cause, "product repository failure");
        let error = Error::new(code, public_message);
        match self.exposure {
            ErrorExposure::Production => error,
            ErrorExposure::Development => error.with_details(json!({ "cause": cause })),
        }
    }

    async fn require_existing(&self, id: &ProductId) -> Result<Product, Error> {
        self.repo
            .find(id)
            .await
            .map_err(|err| self.map_repository_error(err))?
            .ok_or_else(|| product_not_found(id))
    }
}

#[async_trait]
impl<R> ProductCommand for ProductService<R>
where
    R: ProductRepository,
{
    async fn create(&self, draft: ProductDraft) -> Result<Product, Error> {
        self.repo
            .insert(&draft)
            .await
            .map_err(|err| self.map_repository_error(err))
    }

    async fn update(&self, id: &ProductId, changes: ProductChanges) -> Result<Product, Error> {
        self.require_existing(id).await?;
        let updated = self
            .repo
            .update(id, &changes)
            .await
            .map_err(|err| self.map_repository_error(err))?;
        updated.ok_or_else(|| {
            warn!(%id, "product disappeared between existence check and update");
            product_not_found(id)
        })
    }

    async fn remove(&self, id: &ProductId) -> Result<Product, Error> {
        self.require_existing(id).await?;
        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(|err| self.map_repository_error(err))?;
        removed.ok_or_else(|| {
            warn!(%id, "product disappeared between existence check and delete");
            product_not_found(id)
        })
    }
}

#[async_trait]
impl<R> ProductQuery for ProductService<R>
where
    R: ProductRepository,
{
    async fn find_all(&self) -> Result<Vec<Product>, Error> {
        self.repo
            .list()
            .await
            .map_err(|err| self.map_repository_error(err))
    }

    async fn find_one(&self, id: &ProductId) -> Result<Option<Product>, Error> {
        self.repo
            .find(id)
            .await
            .map_err(|err| self.map_repository_error(err))
    }
}

#[cfg(test)]
#[path = "product_service_tests.rs"]
mod tests;
