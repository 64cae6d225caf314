//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the domain's
//! driving ports, so they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{ProductCommand, ProductQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub products: Arc<dyn ProductCommand>,
    pub products_query: Arc<dyn ProductQuery>,
}

impl HttpState {
    /// Bundle the product command and query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use products_backend::domain::{ErrorExposure, ProductService};
    /// use products_backend::inbound::http::state::HttpState;
    /// use products_backend::outbound::memory::InMemoryProductRepository;
    ///
    /// let service = Arc::new(ProductService::new(
    ///     Arc::new(InMemoryProductRepository::new()),
    ///     ErrorExposure::Development,
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.products_query.clone();
    /// ```
    pub fn new(products: Arc<dyn ProductCommand>, products_query: Arc<dyn ProductQuery>) -> Self {
        Self {
            products,
            products_query,
        }
    }
}
