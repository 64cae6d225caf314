//! Page handlers for the product catalogue.
//!
//! Reads never fail the page: a missing or malformed product renders the
//! not-found page and an unreachable API renders an empty catalogue. Failed
//! mutations keep the user on the current view with an inline message.

use actix_web::http::StatusCode;
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{HttpResponse, ResponseError, get, post, web};
use product_client::{Absence, Fetched, ProductClient, ProductClientError, ProductForm};
use tracing::{error, info, warn};

use crate::pages::{FormView, Pages};

/// Shared state injected into every handler.
pub struct FrontendState {
    pub client: ProductClient,
    pub pages: Pages,
}

impl FrontendState {
    pub fn new(client: ProductClient, pages: Pages) -> Self {
        Self { client, pages }
    }
}

/// Failure to produce a page at all.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to render page: {0}")]
    Render(#[from] tera::Error),
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self, "page rendering failed");
        HttpResponse::InternalServerError()
            .content_type(ContentType::plaintext())
            .body("Something went wrong while rendering this page.")
    }
}

type PageResult = Result<HttpResponse, PageError>;

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

fn not_found_page(pages: &Pages) -> PageResult {
    Ok(html(StatusCode::NOT_FOUND, pages.not_found()?))
}

/// Status for a page that re-renders after a failed mutation.
fn failure_status(err: &ProductClientError) -> StatusCode {
    match err {
        ProductClientError::InvalidPrice { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ProductClientError::Status { status, .. } if (400..500).contains(status) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ProductClientError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Message shown inline to the user.
fn user_message(err: &ProductClientError) -> String {
    match err {
        ProductClientError::Status { detail, .. } => detail.clone(),
        ProductClientError::InvalidPrice { .. } => "Price must be a number.".to_owned(),
        ProductClientError::Timeout { .. } => {
            "The product service took too long to respond. Please try again.".to_owned()
        }
        ProductClientError::Transport { .. } => {
            "The product service is unreachable. Please try again.".to_owned()
        }
        ProductClientError::Decode { .. } => {
            "The product service sent an unexpected response.".to_owned()
        }
    }
}

#[get("/")]
async fn index() -> HttpResponse {
    see_other("/products")
}

#[get("/products")]
async fn catalog(state: web::Data<FrontendState>) -> PageResult {
    let products = state.client.list_products().await;
    Ok(html(StatusCode::OK, state.pages.catalog(&products)?))
}

#[get("/products/new")]
async fn new_product(state: web::Data<FrontendState>) -> PageResult {
    let form = ProductForm::default();
    Ok(html(StatusCode::OK, state.pages.form(&FormView::create(&form))?))
}

#[post("/products/new")]
async fn create_product(
    state: web::Data<FrontendState>,
    form: web::Form<ProductForm>,
) -> PageResult {
    let form = form.into_inner();
    match state.client.create_product(&form).await {
        Ok(product) => {
            info!(product_id = %product.id, "product created");
            Ok(see_other(&format!("/products/{}", product.id)))
        }
        Err(err) => {
            warn!(error = %err, "creating product failed");
            let view = FormView::create(&form).with_error(user_message(&err));
            Ok(html(failure_status(&err), state.pages.form(&view)?))
        }
    }
}

#[get("/products/{id}")]
async fn product_detail(state: web::Data<FrontendState>, path: web::Path<String>) -> PageResult {
    match state.client.get_product(&path).await {
        Fetched::Found(product) => Ok(html(StatusCode::OK, state.pages.detail(&product, None)?)),
        Fetched::Absent(_) => not_found_page(&state.pages),
    }
}

#[get("/products/{id}/edit")]
async fn edit_product(state: web::Data<FrontendState>, path: web::Path<String>) -> PageResult {
    let id = path.into_inner();
    match state.client.get_product(&id).await {
        Fetched::Found(product) => {
            let form = ProductForm::from(&product);
            Ok(html(StatusCode::OK, state.pages.form(&FormView::edit(&product.id, &form))?))
        }
        Fetched::Absent(_) => not_found_page(&state.pages),
    }
}

#[post("/products/{id}/edit")]
async fn update_product(
    state: web::Data<FrontendState>,
    path: web::Path<String>,
    form: web::Form<ProductForm>,
) -> PageResult {
    let id = path.into_inner();
    let form = form.into_inner();
    match state.client.update_product(&id, &form).await {
        Ok(product) => {
            info!(product_id = %product.id, "product updated");
            Ok(see_other(&format!("/products/{}", product.id)))
        }
        Err(err) if err.is_not_found() => not_found_page(&state.pages),
        Err(err) => {
            warn!(error = %err, product_id = %id, "updating product failed");
            let view = FormView::edit(&id, &form).with_error(user_message(&err));
            Ok(html(failure_status(&err), state.pages.form(&view)?))
        }
    }
}

#[post("/products/{id}/delete")]
async fn delete_product(state: web::Data<FrontendState>, path: web::Path<String>) -> PageResult {
    let id = path.into_inner();
    let err = match state.client.delete_product(&id).await {
        Ok(_) => {
            info!(product_id = %id, "product deleted");
            return Ok(see_other("/products"));
        }
        Err(err) => err,
    };
    warn!(error = %err, product_id = %id, "deleting product failed");
    if err.is_not_found() {
        return not_found_page(&state.pages);
    }
    let message = format!("Could not delete the product: {}", user_message(&err));
    let deadline = state.client.config().delete_timeout();
    match state.client.get_product_with_timeout(&id, deadline).await {
        Fetched::Found(product) => {
            let body = state.pages.detail(&product, Some(&message))?;
            Ok(html(failure_status(&err), body))
        }
        Fetched::Absent(Absence::Unreachable) => {
            let body = state.pages.unavailable(&message)?;
            Ok(html(failure_status(&err), body))
        }
        Fetched::Absent(_) => not_found_page(&state.pages),
    }
}

/// Register every page route. `/products/new` precedes `/products/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(catalog)
        .service(new_product)
        .service(create_product)
        .service(product_detail)
        .service(edit_product)
        .service(update_product)
        .service(delete_product);
}
