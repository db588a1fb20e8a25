//! Contract violation errors.

/// Result type for contract checks.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Violations detected when a response is checked against a specification.
///
/// Status and content type are checked before any body assertion, so a
/// broken transport-level contract always surfaces as one of the first
/// three variants rather than as a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// Observed status code differs from the expected one.
    #[error("unexpected status: expected {expected}, got {actual}")]
    UnexpectedStatus {
        /// Status code the response specification expects.
        expected: u16,
        /// Status code the service returned.
        actual: u16,
    },

    /// Response carried no content-type header at all.
    #[error("missing content type: expected {expected}")]
    MissingContentType {
        /// Content type the response specification expects.
        expected: String,
    },

    /// Observed content type differs from the expected one.
    #[error("unexpected content type: expected {expected}, got {actual}")]
    UnexpectedContentType {
        /// Content type the response specification expects.
        expected: String,
        /// Content-type header the service returned.
        actual: String,
    },

    /// A collection record is not a JSON object.
    #[error("record {index} is not an object")]
    RecordNotObject {
        /// Zero-based position of the record in the collection.
        index: usize,
    },

    /// A collection record is missing a required key.
    #[error("record {index} is missing key '{key}'")]
    MissingKey {
        /// Zero-based position of the record in the collection.
        index: usize,
        /// The required key that was absent.
        key: &'static str,
    },
}
