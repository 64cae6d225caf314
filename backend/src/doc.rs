//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the product and health endpoints plus the error
//! schemas. Swagger UI serves it in debug builds and `openapi-dump` prints it
//! for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::products::{ProductRequest, ProductResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products backend API",
        description = "CRUD interface for the product catalogue and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::version::api_version,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::put_product,
        crate::inbound::http::products::patch_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema, ProductRequest, ProductResponse)),
    tags(
        (name = "products", description = "Product catalogue"),
        (name = "health", description = "Orchestration probes"),
        (name = "meta", description = "API metadata")
    )
)]
pub struct ApiDoc;
