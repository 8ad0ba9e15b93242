//! Result document core for a key-value document store client.
//!
//! The transport layer completes an operation and hands the raw artifacts to
//! this crate: [`document::ResultDocument::new`] on success,
//! [`document::ResultDocument::from_status`] on failure. The produced
//! document is returned to the application layer, which branches on
//! [`error::ErrorKind`] or extracts a typed view from [`crudresults`].
//! Everything here is pure data assembly; nothing blocks, retries, or holds
//! shared state.

pub mod crudresults;
pub mod document;
pub mod error;
pub mod mutationtoken;
pub mod status;
pub mod transcoding;
