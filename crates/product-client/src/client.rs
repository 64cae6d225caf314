//! Reqwest-backed product client.
//!
//! Delete always carries its own deadline and single-product fetches may take
//! one; other calls rely on the transport's defaults. Nothing is retried.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{map_status_error, map_transport_error};
use crate::model::{Absence, Deleted, Fetched, Product, ProductForm, ProductPayload};
use crate::ProductClientError;

/// HTTP client for the `/products` resource.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: Client,
    config: ClientConfig,
}

impl ProductClient {
    /// Build a client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the whole catalogue. Any failure yields an empty list.
    pub async fn list_products(&self) -> Vec<Product> {
        let url = self.config.products_url(None);
        let response = match self.http.get(url).header(ACCEPT, "application/json").send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "listing products failed");
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "listing products returned an error status");
            return Vec::new();
        }
        match response.json::<Vec<Product>>().await {
            Ok(products) => products,
            Err(error) => {
                warn!(%error, "product list body could not be decoded");
                Vec::new()
            }
        }
    }

    /// Fetch one product, reporting why nothing was found instead of failing.
    pub async fn get_product(&self, id: &str) -> Fetched<Product> {
        self.fetch_product(id, None).await
    }

    /// Like [`Self::get_product`], but gives up after `timeout`.
    ///
    /// A fetch that misses the deadline is [`Absence::Unreachable`].
    pub async fn get_product_with_timeout(&self, id: &str, timeout: Duration) -> Fetched<Product> {
        self.fetch_product(id, Some(timeout)).await
    }

    async fn fetch_product(&self, id: &str, timeout: Option<Duration>) -> Fetched<Product> {
        let mut request = self
            .http
            .get(self.config.products_url(Some(id)))
            .header(ACCEPT, "application/json");
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, product_id = id, "fetching product failed");
                return Fetched::Absent(Absence::Unreachable);
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(
                status = status.as_u16(),
                product_id = id,
                "product fetch returned an error status"
            );
            return Fetched::Absent(Absence::Status(status.as_u16()));
        }
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, product_id = id, "reading product body failed");
                return Fetched::Absent(Absence::Unreachable);
            }
        };
        if body.iter().all(u8::is_ascii_whitespace) {
            warn!(product_id = id, "product fetch returned an empty body");
            return Fetched::Absent(Absence::EmptyBody);
        }
        match serde_json::from_slice::<Product>(&body) {
            Ok(product) => Fetched::Found(product),
            Err(error) => {
                warn!(%error, product_id = id, "product body is not a product document");
                Fetched::Absent(Absence::Malformed)
            }
        }
    }

    /// Create a product from form input, coercing the price first.
    ///
    /// # Errors
    ///
    /// [`ProductClientError::InvalidPrice`] before any request when the price
    /// is not numeric; otherwise the status, transport or decode failure.
    pub async fn create_product(&self, form: &ProductForm) -> Result<Product, ProductClientError> {
        let payload = ProductPayload::try_from(form)?;
        let request = self.http.post(self.config.products_url(None)).json(&payload);
        send_for_product(request).await
    }

    /// Replace a product's fields. Same contract as [`Self::create_product`].
    ///
    /// # Errors
    ///
    /// See [`Self::create_product`]; a missing product is a 404 status error.
    pub async fn update_product(
        &self,
        id: &str,
        form: &ProductForm,
    ) -> Result<Product, ProductClientError> {
        let payload = ProductPayload::try_from(form)?;
        let request = self.http.put(self.config.products_url(Some(id))).json(&payload);
        send_for_product(request).await
    }

    /// Delete a product, abandoning the request after the configured timeout.
    ///
    /// # Errors
    ///
    /// [`ProductClientError::Timeout`] when the deadline passes, a status error
    /// for non-success answers, or a transport failure.
    pub async fn delete_product(&self, id: &str) -> Result<Deleted, ProductClientError> {
        let response = self
            .http
            .delete(self.config.products_url(Some(id)))
            .timeout(self.config.delete_timeout())
            .send()
            .await
            .map_err(|error| map_transport_error(&error))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(&error))?;
        debug!(status = status.as_u16(), product_id = id, "delete answered");
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        Ok(serde_json::from_slice::<Product>(&body)
            .map_or(Deleted::Acknowledged, Deleted::Product))
    }
}

async fn send_for_product(request: RequestBuilder) -> Result<Product, ProductClientError> {
    let response = request
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|error| map_transport_error(&error))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|error| map_transport_error(&error))?;
    if !status.is_success() {
        return Err(map_status_error(status, &body));
    }
    serde_json::from_slice(&body).map_err(|error| ProductClientError::Decode {
        message: error.to_string(),
    })
}
