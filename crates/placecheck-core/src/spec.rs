//! Reusable request and response specifications.
//!
//! Both templates are built once during suite setup and shared immutably
//! across test cases. A case layers its own parameters on top of the
//! request specification with [`RequestSpec::with_param`], which returns a
//! new value and leaves the shared instance untouched.

use crate::error::ContractError;

/// JSON media type expected on every exchange.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Template of fixed request attributes for the posts collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    base_url: String,
    accept: String,
    params: Vec<(String, String)>,
}

impl RequestSpec {
    /// Create a specification rooted at the collection base URL.
    ///
    /// A trailing slash on the base URL is normalized away.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            accept: CONTENT_TYPE_JSON.to_string(),
            params: Vec::new(),
        }
    }

    /// Layer an additional query parameter, leaving `self` untouched.
    #[must_use]
    pub fn with_param(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut layered = self.clone();
        layered.params.push((name.into(), value.into()));
        layered
    }

    /// URL addressing the whole collection.
    #[must_use]
    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    /// URL addressing a single resource by id.
    #[must_use]
    pub fn resource_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// Accept header value sent with every request.
    #[must_use]
    pub fn accept(&self) -> &str {
        &self.accept
    }

    /// Query parameters layered onto this specification.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

/// Template of expected response attributes.
///
/// Checked against every response before any case-specific assertion runs,
/// so a wrong status or content type fails a case in one shared place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    status: u16,
    content_type: String,
}

impl ResponseSpec {
    /// Expect a 200 response carrying JSON.
    #[must_use]
    pub fn ok_json() -> Self {
        Self {
            status: 200,
            content_type: CONTENT_TYPE_JSON.to_string(),
        }
    }

    /// Expect a 404 response that still carries a typed JSON body.
    ///
    /// Direct resource lookups miss with a 404 error document, unlike
    /// collection filters, which answer with an empty array and a 200.
    #[must_use]
    pub fn not_found_json() -> Self {
        Self {
            status: 404,
            content_type: CONTENT_TYPE_JSON.to_string(),
        }
    }

    /// Expected status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Expected content-type essence.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Check an observed status and content-type header against the
    /// template.
    ///
    /// The content type is compared by media-type essence, so a charset
    /// suffix such as `application/json; charset=utf-8` satisfies a JSON
    /// expectation.
    ///
    /// # Errors
    ///
    /// Returns the first mismatch, status before content type.
    pub fn verify(&self, status: u16, content_type: Option<&str>) -> Result<(), ContractError> {
        if status != self.status {
            return Err(ContractError::UnexpectedStatus {
                expected: self.status,
                actual: status,
            });
        }

        let Some(observed) = content_type else {
            return Err(ContractError::MissingContentType {
                expected: self.content_type.clone(),
            });
        };
        if !media_type_essence(observed).eq_ignore_ascii_case(&self.content_type) {
            return Err(ContractError::UnexpectedContentType {
                expected: self.content_type.clone(),
                actual: observed.to_string(),
            });
        }

        Ok(())
    }
}

/// Strip parameters such as `charset=utf-8` from a content-type value.
fn media_type_essence(value: &str) -> &str {
    match value.split_once(';') {
        Some((essence, _)) => essence.trim(),
        None => value.trim(),
    }
}
