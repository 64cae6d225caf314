//! Driving port for product reads.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductId};

/// Domain use-case port for reading the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// List all products.
    async fn find_all(&self) -> Result<Vec<Product>, Error>;

    /// Look up one product. Absence is `Ok(None)`, not an error.
    async fn find_one(&self, id: &ProductId) -> Result<Option<Product>, Error>;
}
