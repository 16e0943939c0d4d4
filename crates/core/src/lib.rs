//! Domain layer shared by the record store and the HTTP server.
//!
//! Holds the id/timestamp aliases, the [`error::CoreError`] taxonomy,
//! required-field checks, and the upload handler that owns the managed
//! attachment directory.

pub mod error;
pub mod types;
pub mod upload;
pub mod validation;
