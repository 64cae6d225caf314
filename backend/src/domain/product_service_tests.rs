//! Tests for the product service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockProductRepository;

#[fixture]
fn widget_draft() -> ProductDraft {
    ProductDraft::try_new("Widget", None, 9.99, "http://x/y.png").expect("valid draft")
}

#[fixture]
fn stored_widget(widget_draft: ProductDraft) -> Product {
    Product::from_draft(ProductId::random(), &widget_draft, Utc::now())
}

fn make_service(
    repo: MockProductRepository,
    exposure: ErrorExposure,
) -> ProductService<MockProductRepository> {
    ProductService::new(Arc::new(repo), exposure)
}

#[rstest]
#[tokio::test]
async fn create_returns_stored_product(widget_draft: ProductDraft, stored_widget: Product) {
    let mut repo = MockProductRepository::new();
    let expected = stored_widget.clone();
    repo.expect_insert()
        .with(eq(widget_draft.clone()))
        .times(1)
        .return_once(move |_| Ok(stored_widget));

    let service = make_service(repo, ErrorExposure::Production);
    let created = service.create(widget_draft).await.expect("create succeeds");
    assert_eq!(created, expected);
}

#[rstest]
#[tokio::test]
async fn create_maps_duplicate_name_to_conflict(widget_draft: ProductDraft) {
    let mut repo = MockProductRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(ProductRepositoryError::duplicate_name("Widget")));

    let service = make_service(repo, ErrorExposure::Production);
    let error = service.create(widget_draft).await.expect_err("conflict");
    assert_eq!(error.code(), ErrorCode::Conflict);
    assert!(error.message().contains("Widget"));
}

#[rstest]
#[case(ErrorExposure::Production, None)]
#[case(ErrorExposure::Development, Some("syntax error at or near"))]
#[tokio::test]
async fn create_maps_query_failure_to_internal(
    widget_draft: ProductDraft,
    #[case] exposure: ErrorExposure,
    #[case] expected_cause: Option<&str>,
) {
    let mut repo = MockProductRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(ProductRepositoryError::query("syntax error at or near")));

    let service = make_service(repo, exposure);
    let error = service.create(widget_draft).await.expect_err("internal");
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "product storage error");
    let cause = error
        .details()
        .and_then(|details| details.get("cause"))
        .and_then(|cause| cause.as_str());
    assert_eq!(cause, expected_cause);
}

#[rstest]
#[tokio::test]
async fn find_all_maps_connection_failure_to_service_unavailable() {
    let mut repo = MockProductRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Err(ProductRepositoryError::connection("pool timed out")));

    let service = make_service(repo, ErrorExposure::Production);
    let error = service.find_all().await.expect_err("unavailable");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert!(error.details().is_none());
}

#[rstest]
#[tokio::test]
async fn find_one_returns_none_for_missing_product() {
    let mut repo = MockProductRepository::new();
    repo.expect_find().times(1).return_once(|_| Ok(None));

    let service = make_service(repo, ErrorExposure::Production);
    let found = service
        .find_one(&ProductId::random())
        .await
        .expect("absence is not an error");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn update_rejects_missing_product_without_writing() {
    let mut repo = MockProductRepository::new();
    repo.expect_find().times(1).return_once(|_| Ok(None));
    repo.expect_update().never();

    let service = make_service(repo, ErrorExposure::Production);
    let changes = ProductChanges::try_new("Gadget", None, 1.0, "img").expect("valid changes");
    let error = service
        .update(&ProductId::random(), changes)
        .await
        .expect_err("not found");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_overwrites_fields_of_existing_product(stored_widget: Product) {
    let id = stored_widget.id;
    let mut updated = stored_widget.clone();
    let changes =
        ProductChanges::try_new("Gadget", Some("bigger".into()), 19.5, "http://x/z.png")
            .expect("valid changes");
    updated.apply(&changes, stored_widget.updated_at + Duration::seconds(1));
    let expected = updated.clone();

    let mut repo = MockProductRepository::new();
    repo.expect_find()
        .with(eq(id))
        .times(1)
        .return_once(move |_| Ok(Some(stored_widget)));
    repo.expect_update()
        .with(eq(id), eq(changes.clone()))
        .times(1)
        .return_once(move |_, _| Ok(Some(updated)));

    let service = make_service(repo, ErrorExposure::Production);
    let result = service.update(&id, changes).await.expect("update succeeds");
    assert_eq!(result, expected);
}

#[rstest]
#[tokio::test]
async fn remove_returns_deleted_product(stored_widget: Product) {
    let id = stored_widget.id;
    let expected = stored_widget.clone();
    let deleted = stored_widget.clone();

    let mut repo = MockProductRepository::new();
    repo.expect_find()
        .times(1)
        .return_once(move |_| Ok(Some(stored_widget)));
    repo.expect_delete()
        .with(eq(id))
        .times(1)
        .return_once(move |_| Ok(Some(deleted)));

    let service = make_service(repo, ErrorExposure::Production);
    let removed = service.remove(&id).await.expect("remove succeeds");
    assert_eq!(removed, expected);
}

#[rstest]
#[tokio::test]
async fn remove_reports_not_found_when_product_vanishes_mid_operation(stored_widget: Product) {
    let id = stored_widget.id;
    let mut repo = MockProductRepository::new();
    repo.expect_find()
        .times(1)
        .return_once(move |_| Ok(Some(stored_widget)));
    repo.expect_delete().times(1).return_once(|_| Ok(None));

    let service = make_service(repo, ErrorExposure::Production);
    let error = service.remove(&id).await.expect_err("not found");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn remove_rejects_missing_product() {
    let mut repo = MockProductRepository::new();
    repo.expect_find().times(1).return_once(|_| Ok(None));
    repo.expect_delete().never();

    let service = make_service(repo, ErrorExposure::Development);
    let error = service
        .remove(&ProductId::random())
        .await
        .expect_err("not found");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
fn exposure_follows_production_flag() {
    assert_eq!(
        ErrorExposure::from_production_flag(true),
        ErrorExposure::Production
    );
    assert_eq!(
        ErrorExposure::from_production_flag(false),
        ErrorExposure::Development
    );
}
