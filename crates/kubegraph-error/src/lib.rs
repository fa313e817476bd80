//! # kubegraph-error
//!
//! Unified error handling for kubegraph.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., ConfigInvalid, ListFailed)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use kubegraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ListFailed, "listing timed out")
//!         .with_operation("client::list")
//!         .with_context("resource", "pods")
//!         .with_context("namespace", "default"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, kubegraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using kubegraph Error
pub type Result<T> = std::result::Result<T, Error>;
