//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the gateway every server call passes through, `error` is its
//! normalized failure type, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
