//! Core contract model for the placecheck suite.
//!
//! This crate provides the transport-agnostic pieces of the posts API
//! contract:
//!
//! - **Records**: [`Post`] and its required-key shape invariant
//! - **Filters**: [`PostFilter`] collection query parameters
//! - **Specifications**: [`RequestSpec`] and [`ResponseSpec`] templates
//! - **Errors**: [`ContractError`] contract-violation taxonomy
//!
//! The two specification templates are built once during suite setup and
//! shared immutably across every test case. A case that needs extra query
//! parameters layers them on top of the shared request specification
//! without mutating it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod filter;
pub mod post;
pub mod spec;

pub use error::{ContractError, Result};
pub use filter::PostFilter;
pub use post::{verify_collection_shape, Post, REQUIRED_KEYS};
pub use spec::{RequestSpec, ResponseSpec, CONTENT_TYPE_JSON};
