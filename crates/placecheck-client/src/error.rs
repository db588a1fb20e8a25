//! Client error types.

use placecheck_core::ContractError;

/// Errors that can occur when exercising the posts API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response violated the shared response specification.
    #[error("contract violation: {0}")]
    Contract(#[from] ContractError),

    /// Response body did not decode into the expected record shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Direct lookup addressed a resource that does not exist.
    #[error("post not found: {id}")]
    NotFound {
        /// The id that was requested.
        id: i64,
    },
}
