//! Server-rendered product catalogue.
//!
//! Pages talk to the products API through [`product_client::ProductClient`].

pub mod config;
pub mod pages;
pub mod routes;
