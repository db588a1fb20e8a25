//! The remote post record and its shape invariant.

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Keys every post record must carry, exactly.
pub const REQUIRED_KEYS: [&str; 4] = ["id", "userId", "title", "body"];

/// A post record as served by the remote collection.
///
/// The suite only observes this shape; it never constructs or persists it
/// outside of test fixtures. Unknown fields are rejected, so a successful
/// typed decode proves a record carries exactly the required keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Post {
    /// Unique post identifier.
    pub id: i64,
    /// Identifier of the authoring user. Shared by several posts.
    pub user_id: i64,
    /// Post title. Unique across the collection.
    pub title: String,
    /// Post body text.
    pub body: String,
}

/// Verify that every record of a collection is an object carrying all
/// required keys.
///
/// Operates on raw JSON values so that a missing key is reported by name
/// and record position instead of as an opaque decode failure.
///
/// # Errors
///
/// Returns the first violation found: a non-object record or the first
/// missing key within a record.
pub fn verify_collection_shape(records: &[serde_json::Value]) -> Result<(), ContractError> {
    for (index, record) in records.iter().enumerate() {
        let Some(object) = record.as_object() else {
            return Err(ContractError::RecordNotObject { index });
        };
        for key in REQUIRED_KEYS {
            if !object.contains_key(key) {
                return Err(ContractError::MissingKey { index, key });
            }
        }
    }
    Ok(())
}
