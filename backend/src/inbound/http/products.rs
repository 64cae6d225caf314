//! Product catalogue HTTP handlers.
//!
//! ```text
//! GET    /api/products
//! POST   /api/products
//! GET    /api/products/{id}
//! PUT    /api/products/{id}
//! PATCH  /api/products/{id}
//! DELETE /api/products/{id}
//! ```
//!
//! Path identifiers that are not UUIDs cannot name a product and are answered
//! exactly like unknown ids.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product_service::product_not_found;
use crate::domain::{Error, Product, ProductChanges, ProductDraft, ProductId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{invalid_field_error, missing_field_error};

/// Request payload for creating or fully replacing a product.
///
/// Server-managed fields (`id`, `createdAt`, `updatedAt`) are not part of the
/// payload; if a client sends them they are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "A small widget")]
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: Option<f64>,
    #[schema(example = "http://x/y.png")]
    pub image: Option<String>,
}

/// Stored product as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            description: value.description,
            price: value.price,
            image: value.image,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductPath {
    id: String,
}

struct ParsedFields {
    name: String,
    description: Option<String>,
    price: f64,
    image: String,
}

fn parse_fields(payload: ProductRequest) -> Result<ParsedFields, Error> {
    Ok(ParsedFields {
        name: payload.name.ok_or_else(|| missing_field_error("name"))?,
        description: payload.description,
        price: payload.price.ok_or_else(|| missing_field_error("price"))?,
        image: payload.image.ok_or_else(|| missing_field_error("image"))?,
    })
}

fn parse_draft(payload: ProductRequest) -> Result<ProductDraft, Error> {
    let fields = parse_fields(payload)?;
    ProductDraft::try_new(fields.name, fields.description, fields.price, fields.image)
        .map_err(|err| invalid_field_error(&err))
}

fn parse_changes(payload: ProductRequest) -> Result<ProductChanges, Error> {
    let fields = parse_fields(payload)?;
    ProductChanges::try_new(fields.name, fields.description, fields.price, fields.image)
        .map_err(|err| invalid_field_error(&err))
}

/// Resolve a path id, treating malformed ids as unknown products.
fn resolve_id(path: &ProductPath) -> Result<ProductId, Error> {
    ProductId::parse(&path.id).ok_or_else(|| {
        Error::not_found(format!("product {} not found", path.id))
            .with_details(serde_json::json!({ "id": path.id, "code": "product_not_found" }))
    })
}

/// List all products.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    let products = state.products_query.find_all().await?;
    Ok(web::Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Created product", body = ProductResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Name already in use", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<ProductRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(payload.into_inner())?;
    let product = state.products.create(draft).await?;
    Ok(HttpResponse::Created().json(ProductResponse::from(product)))
}

/// Fetch one product.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product", body = ProductResponse),
        (status = 404, description = "Unknown product", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<ProductPath>,
) -> ApiResult<web::Json<ProductResponse>> {
    let id = resolve_id(&path)?;
    let product = state
        .products_query
        .find_one(&id)
        .await?
        .ok_or_else(|| product_not_found(&id))?;
    Ok(web::Json(ProductResponse::from(product)))
}

async fn replace_product(
    state: web::Data<HttpState>,
    path: web::Path<ProductPath>,
    payload: web::Json<ProductRequest>,
) -> ApiResult<web::Json<ProductResponse>> {
    let id = resolve_id(&path)?;
    let changes = parse_changes(payload.into_inner())?;
    let product = state.products.update(&id, changes).await?;
    Ok(web::Json(ProductResponse::from(product)))
}

/// Replace every mutable field of a product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product identifier")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ProductResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown product", body = ErrorSchema),
        (status = 409, description = "Name already in use", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "replaceProduct"
)]
#[put("/products/{id}")]
pub async fn put_product(
    state: web::Data<HttpState>,
    path: web::Path<ProductPath>,
    payload: web::Json<ProductRequest>,
) -> ApiResult<web::Json<ProductResponse>> {
    replace_product(state, path, payload).await
}

/// Same full-replacement semantics as `PUT`; there is no partial patch.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product identifier")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ProductResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown product", body = ErrorSchema),
        (status = 409, description = "Name already in use", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
#[patch("/products/{id}")]
pub async fn patch_product(
    state: web::Data<HttpState>,
    path: web::Path<ProductPath>,
    payload: web::Json<ProductRequest>,
) -> ApiResult<web::Json<ProductResponse>> {
    replace_product(state, path, payload).await
}

/// Delete a product and return its last representation.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Deleted product", body = ProductResponse),
        (status = 404, description = "Unknown product", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/products/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    path: web::Path<ProductPath>,
) -> ApiResult<web::Json<ProductResponse>> {
    let id = resolve_id(&path)?;
    let product = state.products.remove(&id).await?;
    Ok(web::Json(ProductResponse::from(product)))
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
