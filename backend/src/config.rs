//! Backend configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `PRODUCTS_*` environment variables over
//! configuration files. Everything is resolved once in `main` and injected
//! into the components that need it.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ErrorExposure;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3100";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Settings for the products backend process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRODUCTS")]
pub struct BackendSettings {
    /// PostgreSQL connection string. Without it the in-memory store is used.
    pub database_url: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Hide raw storage errors from API responses.
    #[ortho_config(default = false)]
    pub production: bool,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl BackendSettings {
    /// Return the listen address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Fails when the configured value is not a `host:port` socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Return the database URL when one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Error exposure mode derived from the production flag.
    pub fn error_exposure(&self) -> ErrorExposure {
        ErrorExposure::from_production_flag(self.production)
    }
}
