//! Driven port for product persistence.

use async_trait::async_trait;

use crate::domain::{Product, ProductChanges, ProductDraft, ProductId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// The store could not be reached or dropped the connection.
        Connection { message: String } => "product repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "product repository query failed: {message}",
        /// The uniqueness constraint on the product name was violated.
        DuplicateName { name: String } => "a product named '{name}' already exists",
    }
}

/// Storage contract for products.
///
/// Lookups, updates and deletes report absence as `Ok(None)`; only genuine
/// storage failures are errors. Adapters assign identifiers and timestamps.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError>;

    /// Return every stored product in storage order.
    async fn list(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Fetch a product by identifier.
    async fn find(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Overwrite the mutable fields of a product.
    async fn update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, ProductRepositoryError>;

    /// Delete a product, returning its last stored representation.
    async fn delete(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError>;
}
