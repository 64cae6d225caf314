//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn body_json(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let value = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, value)
}

#[actix_web::test]
async fn response_carries_trace_id_header_and_body() {
    let error = Error::conflict("a product named 'Widget' already exists")
        .with_trace_id("00000000-0000-0000-0000-000000000000");
    let (status, header, body) = body_json(&error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        header.as_deref(),
        Some("00000000-0000-0000-0000-000000000000")
    );
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["traceId"], "00000000-0000-0000-0000-000000000000");
}

#[actix_web::test]
async fn response_omits_trace_header_when_absent() {
    let (_, header, body) = body_json(&Error::not_found("missing")).await;
    assert!(header.is_none());
    assert_eq!(body, json!({ "code": "not_found", "message": "missing" }));
}

#[actix_web::test]
async fn internal_details_are_serialised_as_given() {
    let error = Error::internal("product storage error").with_details(json!({ "cause": "boom" }));
    let (status, _, body) = body_json(&error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["details"]["cause"], "boom");
}

#[rstest]
fn actix_errors_are_redacted() {
    let actix_error = actix_web::error::ErrorBadGateway("upstream secret");
    let error = Error::from(actix_error);
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Internal server error");
}
