//! HTTP server configuration object.

use std::net::SocketAddr;

use products_backend::domain::ErrorExposure;
use products_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) exposure: ErrorExposure,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, exposure: ErrorExposure) -> Self {
        Self {
            bind_addr,
            exposure,
            db_pool: None,
        }
    }

    /// Attach a database pool; without one products live in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
