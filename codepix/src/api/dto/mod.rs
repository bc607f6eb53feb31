//! Request/response DTOs for the HTTP API.
//!
//! Request bodies keep every field optional so that a missing required field
//! is reported with the `Missing "<field>" in request body` contract instead
//! of a generic deserialization error.

pub mod ai;

pub use ai::*;
