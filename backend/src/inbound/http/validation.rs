//! Shared validation helpers for inbound HTTP adapters.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, ProductValidationError};

/// Validation error codes reported under `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationCode {
    MissingField,
    InvalidField,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidField => "invalid_field",
            Self::MalformedBody => "malformed_body",
        }
    }
}

/// Build the error returned when a required field is absent.
pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

/// Build the error returned when a field fails domain validation.
pub(crate) fn invalid_field_error(error: &ProductValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": ValidationCode::InvalidField.as_str(),
    }))
}

/// `JsonConfig` error handler turning body decode failures into
/// `invalid_request` responses with the standard error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected JSON payload");
    let message = match &err {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        JsonPayloadError::Deserialize(inner) => format!("invalid JSON body: {inner}"),
        other => format!("invalid request body: {other}"),
    };
    Error::invalid_request(message)
        .with_details(json!({ "code": ValidationCode::MalformedBody.as_str() }))
        .into()
}
