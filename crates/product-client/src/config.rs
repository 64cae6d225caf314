//! Connection settings for [`ProductClient`](crate::ProductClient).

use std::time::Duration;

use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3100/api";

/// Upper bound on a delete request before it is abandoned.
pub const DEFAULT_DELETE_TIMEOUT: Duration = Duration::from_secs(10);

/// Reasons a base URL cannot be used to address the API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientConfigError {
    /// The value is not a URL at all.
    #[error("invalid API base URL '{value}': {message}")]
    Parse {
        /// Rejected input.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The URL cannot carry path segments (for example `mailto:`).
    #[error("API base URL '{value}' must be an http or https URL")]
    UnsupportedScheme {
        /// Rejected input.
        value: String,
    },
}

/// Client configuration injected at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    delete_timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration rooted at `base_url` with the default delete
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientConfigError`] when the URL does not parse or is not
    /// http(s).
    pub fn new(base_url: &str) -> Result<Self, ClientConfigError> {
        let trimmed = base_url.trim();
        let url = Url::parse(trimmed).map_err(|err| ClientConfigError::Parse {
            value: trimmed.to_owned(),
            message: err.to_string(),
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ClientConfigError::UnsupportedScheme {
                value: trimmed.to_owned(),
            });
        }
        Ok(Self {
            base_url: url,
            delete_timeout: DEFAULT_DELETE_TIMEOUT,
        })
    }

    /// Override how long a delete may run before it is cancelled.
    #[must_use]
    pub fn with_delete_timeout(mut self, timeout: Duration) -> Self {
        self.delete_timeout = timeout;
        self
    }

    /// Root of the API; product URLs are built beneath it.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Deadline applied to delete requests.
    pub fn delete_timeout(&self) -> Duration {
        self.delete_timeout
    }

    /// URL of the product collection, or of one product when `id` is given.
    ///
    /// The id is pushed as a single percent-encoded path segment.
    pub(crate) fn products_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects URLs that cannot be a base, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("products");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_to_ten_second_delete_timeout() {
        let config = ClientConfig::new(DEFAULT_BASE_URL).expect("default URL parses");
        assert_eq!(config.delete_timeout(), Duration::from_secs(10));
        assert_eq!(config.base_url().as_str(), "http://localhost:3100/api");
    }

    #[rstest]
    #[case::no_trailing_slash("http://localhost:3100/api", "http://localhost:3100/api/products")]
    #[case::trailing_slash("http://localhost:3100/api/", "http://localhost:3100/api/products")]
    #[case::root("http://localhost:3100", "http://localhost:3100/products")]
    fn builds_collection_url(#[case] base: &str, #[case] expected: &str) {
        let config = ClientConfig::new(base).expect("valid base");
        assert_eq!(config.products_url(None).as_str(), expected);
    }

    #[test]
    fn encodes_id_as_one_segment() {
        let config = ClientConfig::new(DEFAULT_BASE_URL).expect("valid base");
        let url = config.products_url(Some("a/b c"));
        assert_eq!(url.as_str(), "http://localhost:3100/api/products/a%2Fb%20c");
    }

    #[rstest]
    #[case::garbage("not a url")]
    #[case::mailto("mailto:ops@example.com")]
    #[case::ftp("ftp://example.com/api")]
    fn rejects_unusable_base_urls(#[case] value: &str) {
        assert!(ClientConfig::new(value).is_err());
    }
}
