//! Client for the products backend HTTP API.
//!
//! Reads degrade instead of failing: listing yields an empty catalogue and a
//! single fetch yields [`Fetched::Absent`]. Mutations surface every failure as
//! a [`ProductClientError`] carrying the status and server-provided detail.

mod client;
mod config;
mod error;
mod model;

pub use client::ProductClient;
pub use config::{ClientConfig, ClientConfigError, DEFAULT_BASE_URL, DEFAULT_DELETE_TIMEOUT};
pub use error::ProductClientError;
pub use model::{Absence, Deleted, Fetched, Product, ProductForm, ProductPayload};
