//! Driving port for product mutations.
//!
//! Inbound adapters call this port for create, update and delete without
//! touching persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductChanges, ProductDraft, ProductId};

/// Domain use-case port for changing the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCommand: Send + Sync {
    /// Create a product. Fails with `conflict` when the name is taken.
    async fn create(&self, draft: ProductDraft) -> Result<Product, Error>;

    /// Replace every mutable field. Fails with `not_found` for unknown ids.
    async fn update(&self, id: &ProductId, changes: ProductChanges) -> Result<Product, Error>;

    /// Delete a product and return what was stored. Fails with `not_found`
    /// for unknown ids.
    async fn remove(&self, id: &ProductId) -> Result<Product, Error>;
}
