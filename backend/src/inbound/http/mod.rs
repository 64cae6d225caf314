//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod products;
pub mod schemas;
pub mod state;
pub mod validation;
pub mod version;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Path prefix shared by every API route.
pub const API_PREFIX: &str = "/api";

/// Build the `/api` scope with the product routes and JSON error handling.
///
/// Application state (`web::Data<HttpState>`) is supplied by the caller.
pub fn api_scope() -> Scope {
    web::scope(API_PREFIX)
        .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .service(version::api_version)
        .service(products::list_products)
        .service(products::create_product)
        .service(products::get_product)
        .service(products::put_product)
        .service(products::patch_product)
        .service(products::delete_product)
}
