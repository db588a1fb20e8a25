//! Posts API client for black-box contract checks.
//!
//! This crate drives a remote posts collection through the shared
//! request/response specifications defined in `placecheck-core`: every
//! call merges the immutable request template with its own parameters,
//! issues one GET, and applies the response template before the body is
//! looked at.
//!
//! # Example
//!
//! ```no_run
//! use placecheck_client::{PostsClient, DEFAULT_BASE_URL};
//! use placecheck_core::PostFilter;
//!
//! # async fn example() -> Result<(), placecheck_client::ClientError> {
//! let client = PostsClient::new(DEFAULT_BASE_URL);
//!
//! let posts = client.filter(&PostFilter::UserId(1)).await?;
//! for post in &posts {
//!     println!("{}: {}", post.id, post.title);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;

pub use client::{ClientOptions, PostsClient, DEFAULT_BASE_URL};
pub use error::ClientError;
