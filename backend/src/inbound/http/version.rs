//! API root banner.

use actix_web::{HttpResponse, get};

/// Banner returned by `GET /api`.
pub const API_BANNER: &str = "API version 1.0.0 running";

/// Report that the API is up and which version is serving.
#[utoipa::path(
    get,
    path = "/api",
    responses((
        status = 200,
        description = "Version banner",
        body = String,
        content_type = "text/plain"
    )),
    tags = ["meta"],
    operation_id = "apiVersion"
)]
#[get("")]
pub async fn api_version() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(API_BANNER)
}
