//! Posts API client implementation.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;

use placecheck_core::{Post, PostFilter, RequestSpec, ResponseSpec};

use crate::error::ClientError;

/// Base URL of the public posts collection.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Posts API client.
///
/// Holds the request and response specification templates, built once at
/// construction and reused unmodified by every call.
#[derive(Debug, Clone)]
pub struct PostsClient {
    http: Client,
    request: RequestSpec,
    ok: ResponseSpec,
    not_found: ResponseSpec,
}

impl PostsClient {
    /// Create a client for the given collection base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        Self::from_spec(RequestSpec::new(base_url), options)
    }

    /// Build a client around a request specification constructed elsewhere.
    ///
    /// Suites that build their specification once during setup hand it to
    /// every case's client through this constructor.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn from_spec(request: RequestSpec, options: ClientOptions) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .user_agent(options.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            request,
            ok: ResponseSpec::ok_json(),
            not_found: ResponseSpec::not_found_json(),
        }
    }

    /// The shared request specification.
    #[must_use]
    pub fn request_spec(&self) -> &RequestSpec {
        &self.request
    }

    /// Fetch the whole collection as typed records.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response violates the
    /// response specification, or a record does not carry exactly the
    /// expected keys.
    pub async fn list(&self) -> Result<Vec<Post>, ClientError> {
        let body = self.list_raw().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the whole collection as the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response violates the
    /// response specification.
    pub async fn list_raw(&self) -> Result<String, ClientError> {
        self.fetch_collection(&self.request).await
    }

    /// Fetch the collection narrowed by one filter, as typed records.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response violates the
    /// response specification, or a record does not carry exactly the
    /// expected keys.
    pub async fn filter(&self, filter: &PostFilter) -> Result<Vec<Post>, ClientError> {
        let body = self.filter_raw(filter).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the collection narrowed by one filter, as the raw body.
    ///
    /// A non-matching filter answers with the literal empty array `[]`,
    /// which callers can assert on exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response violates the
    /// response specification.
    pub async fn filter_raw(&self, filter: &PostFilter) -> Result<String, ClientError> {
        let (name, value) = filter.query_pair();
        let layered = self.request.with_param(name, value);
        self.fetch_collection(&layered).await
    }

    /// Fetch a single resource by id via the direct path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the service answers 404 with
    /// a JSON error body, and other errors if the request fails, the
    /// response violates a response specification, or the record does not
    /// decode.
    pub async fn by_id(&self, id: i64) -> Result<Post, ClientError> {
        let url = self.request.resource_url(id);
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, self.request.accept())
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = header_content_type(&response);
        tracing::debug!(%url, status, "resource response");

        if status == self.not_found.status() {
            self.not_found.verify(status, content_type.as_deref())?;
            return Err(ClientError::NotFound { id });
        }
        self.ok.verify(status, content_type.as_deref())?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Issue a collection GET under `spec` and apply the response template.
    async fn fetch_collection(&self, spec: &RequestSpec) -> Result<String, ClientError> {
        let response = self
            .http
            .get(spec.collection_url())
            .query(spec.params())
            .header(ACCEPT, spec.accept())
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = header_content_type(&response);
        tracing::debug!(
            url = spec.collection_url(),
            params = ?spec.params(),
            status,
            "collection response"
        );
        self.ok.verify(status, content_type.as_deref())?;

        Ok(response.text().await?)
    }
}

/// Content-type header of a response, if present and readable.
fn header_content_type(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("placecheck/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientOptions {
    /// Create options with a custom timeout.
    #[must_use]
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout_seconds: seconds,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = PostsClient::new("http://localhost:8080/posts");
        assert_eq!(
            client.request_spec().collection_url(),
            "http://localhost:8080/posts"
        );
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = PostsClient::new("http://localhost:8080/posts/");
        assert_eq!(
            client.request_spec().collection_url(),
            "http://localhost:8080/posts"
        );
    }

    #[test]
    fn client_options() {
        let options = ClientOptions::with_timeout_seconds(5);
        assert_eq!(options.timeout_seconds, 5);

        let client = PostsClient::with_options("http://localhost:8080/posts", options);
        assert!(client.request_spec().params().is_empty());
    }
}
