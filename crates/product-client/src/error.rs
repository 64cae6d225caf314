//! Failures surfaced by mutating client calls.

use reqwest::StatusCode;
use serde::Deserialize;

/// Error returned by create, update and delete.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductClientError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server error message, or the raw body text.
        detail: String,
    },
    /// The request did not complete within its deadline.
    #[error("request timed out: {message}")]
    Timeout {
        /// Transport diagnostic.
        message: String,
    },
    /// The server could not be reached or the connection broke.
    #[error("transport failure: {message}")]
    Transport {
        /// Transport diagnostic.
        message: String,
    },
    /// The server answered success but the body was not a product.
    #[error("unexpected response body: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
    /// The price field did not contain a number; nothing was sent.
    #[error("price must be a number, got '{input}'")]
    InvalidPrice {
        /// The text the user entered.
        input: String,
    },
}

impl ProductClientError {
    /// HTTP status behind the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the product as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub(crate) fn map_transport_error(error: &reqwest::Error) -> ProductClientError {
    if error.is_timeout() {
        ProductClientError::Timeout {
            message: error.to_string(),
        }
    } else {
        ProductClientError::Transport {
            message: error.to_string(),
        }
    }
}

/// Build a status error, preferring the `message` of a JSON error document
/// and falling back to a compacted preview of the raw body.
pub(crate) fn map_status_error(status: StatusCode, body: &[u8]) -> ProductClientError {
    let detail = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body_preview(body),
    };
    let detail = if detail.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no error details")
            .to_owned()
    } else {
        detail
    };
    ProductClientError::Status {
        status: status.as_u16(),
        detail,
    }
}

pub(crate) fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
