//! Tests for product HTTP handlers.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{App, test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockProductCommand, MockProductQuery};
use crate::domain::{ErrorExposure, ProductService};
use crate::inbound::http::api_scope;
use crate::inbound::http::version::API_BANNER;
use crate::outbound::memory::InMemoryProductRepository;

#[fixture]
fn memory_state() -> web::Data<HttpState> {
    let service = Arc::new(ProductService::new(
        Arc::new(InMemoryProductRepository::new()),
        ErrorExposure::Production,
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}

async fn send(state: &web::Data<HttpState>, request: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(App::new().app_data(state.clone()).service(api_scope())).await;
    test::call_service(&app, request.to_request()).await
}

fn widget_payload() -> Value {
    json!({ "name": "Widget", "price": 9.99, "image": "http://x/y.png" })
}

async fn create_widget(state: &web::Data<HttpState>) -> ProductResponse {
    let res = send(
        state,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(widget_payload()),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    test::read_body_json(res).await
}

#[rstest]
#[actix_web::test]
async fn root_reports_version_banner(memory_state: web::Data<HttpState>) {
    let res = send(&memory_state, test::TestRequest::get().uri("/api")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = test::read_body(res).await;
    assert_eq!(body.as_ref(), API_BANNER.as_bytes());
}

#[rstest]
#[actix_web::test]
async fn create_assigns_server_fields(memory_state: web::Data<HttpState>) {
    let created = create_widget(&memory_state).await;
    assert!(ProductId::parse(&created.id).is_some());
    assert_eq!(created.name, "Widget");
    assert_eq!(created.description, None);
    assert_eq!(created.price, 9.99);
    assert_eq!(created.image, "http://x/y.png");
    assert_eq!(created.created_at, created.updated_at);
}

#[rstest]
#[actix_web::test]
async fn create_then_get_round_trips(memory_state: web::Data<HttpState>) {
    let created = create_widget(&memory_state).await;
    let res = send(
        &memory_state,
        test::TestRequest::get().uri(&format!("/api/products/{}", created.id)),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: ProductResponse = test::read_body_json(res).await;
    assert_eq!(fetched, created);
}

#[rstest]
#[actix_web::test]
async fn response_uses_camel_case_timestamps(memory_state: web::Data<HttpState>) {
    create_widget(&memory_state).await;
    let res = send(&memory_state, test::TestRequest::get().uri("/api/products")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let first = &body.as_array().expect("array body")[0];
    assert!(first.get("createdAt").is_some());
    assert!(first.get("updatedAt").is_some());
    assert!(first.get("description").is_some_and(Value::is_null));
}

#[rstest]
#[case(json!({ "price": 1.0, "image": "i" }), "name")]
#[case(json!({ "name": "Widget", "image": "i" }), "price")]
#[case(json!({ "name": "Widget", "price": 1.0 }), "image")]
#[actix_web::test]
async fn create_requires_fields(
    memory_state: web::Data<HttpState>,
    #[case] payload: Value,
    #[case] field: &str,
) {
    let res = send(
        &memory_state,
        test::TestRequest::post().uri("/api/products").set_json(payload),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
}

#[rstest]
#[actix_web::test]
async fn create_rejects_non_numeric_price(memory_state: web::Data<HttpState>) {
    let res = send(
        &memory_state,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({ "name": "Widget", "price": "cheap", "image": "i" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "malformed_body");
}

#[rstest]
#[actix_web::test]
async fn create_rejects_negative_price(memory_state: web::Data<HttpState>) {
    let res = send(
        &memory_state,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({ "name": "Widget", "price": -1.0, "image": "i" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
#[case("not-a-uuid")]
#[actix_web::test]
async fn get_unknown_product_is_not_found(
    memory_state: web::Data<HttpState>,
    #[case] id: &str,
) {
    let res = send(
        &memory_state,
        test::TestRequest::get().uri(&format!("/api/products/{id}")),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn alternate_uuid_spellings_do_not_alias_a_product(memory_state: web::Data<HttpState>) {
    let created = create_widget(&memory_state).await;
    let simple = created.id.replace('-', "");
    for alias in [format!("%7B{}%7D", created.id), simple, created.id.to_uppercase()] {
        let res = send(
            &memory_state,
            test::TestRequest::get().uri(&format!("/api/products/{alias}")),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{alias}");
    }
}

#[rstest]
#[case::put(test::TestRequest::put())]
#[case::patch(test::TestRequest::patch())]
#[actix_web::test]
async fn update_replaces_mutable_fields(
    memory_state: web::Data<HttpState>,
    #[case] request: test::TestRequest,
) {
    let created = create_widget(&memory_state).await;
    let res = send(
        &memory_state,
        request
            .uri(&format!("/api/products/{}", created.id))
            .set_json(json!({
                "id": "ignored",
                "createdAt": "1999-01-01T00:00:00Z",
                "name": "Gadget",
                "description": "shiny",
                "price": 15.0,
                "image": "http://x/z.png",
            })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: ProductResponse = test::read_body_json(res).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.name, "Gadget");
    assert_eq!(updated.description.as_deref(), Some("shiny"));
    assert_eq!(updated.price, 15.0);
}

#[rstest]
#[actix_web::test]
async fn update_unknown_product_is_not_found(memory_state: web::Data<HttpState>) {
    let res = send(
        &memory_state,
        test::TestRequest::put()
            .uri(&format!("/api/products/{}", ProductId::random()))
            .set_json(widget_payload()),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn widget_lifecycle_reports_conflict_then_not_found(memory_state: web::Data<HttpState>) {
    let created = create_widget(&memory_state).await;

    let duplicate = send(
        &memory_state,
        test::TestRequest::post()
            .uri("/api/products")
            .set_json(widget_payload()),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let uri = format!("/api/products/{}", created.id);
    let deleted = send(&memory_state, test::TestRequest::delete().uri(&uri)).await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let body: ProductResponse = test::read_body_json(deleted).await;
    assert_eq!(body, created);

    let again = send(&memory_state, test::TestRequest::delete().uri(&uri)).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn storage_outage_maps_to_service_unavailable() {
    let mut query = MockProductQuery::new();
    query
        .expect_find_all()
        .times(1)
        .return_once(|| Err(Error::service_unavailable("product storage is unavailable")));
    let state = web::Data::new(HttpState::new(
        Arc::new(MockProductCommand::new()),
        Arc::new(query),
    ));

    let res = send(&state, test::TestRequest::get().uri("/api/products")).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[rstest]
#[actix_web::test]
async fn malformed_id_never_reaches_the_service() {
    let mut command = MockProductCommand::new();
    command.expect_remove().never();
    let state = web::Data::new(HttpState::new(
        Arc::new(command),
        Arc::new(MockProductQuery::new()),
    ));

    let res = send(
        &state,
        test::TestRequest::delete().uri("/api/products/definitely-not-a-uuid"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
