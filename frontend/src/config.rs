//! Frontend configuration loaded via OrthoConfig (`FRONTEND_*`).

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use product_client::{ClientConfig, ClientConfigError, DEFAULT_BASE_URL};
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Settings that cannot produce a working API client.
#[derive(Debug, thiserror::Error)]
pub enum FrontendConfigError {
    /// The API base URL is unusable.
    #[error(transparent)]
    Client(#[from] ClientConfigError),
    /// A zero timeout would abandon every delete immediately.
    #[error("FRONTEND_DELETE_TIMEOUT_SECS must be at least 1")]
    ZeroDeleteTimeout,
}

/// Settings for the frontend process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FRONTEND")]
pub struct FrontendSettings {
    /// Root of the products API, for example `http://localhost:3100/api`.
    pub api_base_url: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Seconds before an in-flight delete is abandoned.
    pub delete_timeout_secs: Option<u64>,
}

impl FrontendSettings {
    /// # Errors
    ///
    /// Fails when the configured value is not a `host:port` socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Build the API client configuration, applying defaults for unset values.
    ///
    /// # Errors
    ///
    /// Fails when the base URL is unusable or the delete timeout is zero.
    pub fn client_config(&self) -> Result<ClientConfig, FrontendConfigError> {
        let base_url = self.api_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let config = ClientConfig::new(base_url)?;
        Ok(match self.delete_timeout_secs {
            Some(0) => return Err(FrontendConfigError::ZeroDeleteTimeout),
            Some(secs) => config.with_delete_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}
