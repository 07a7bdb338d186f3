//! Networking modules for the backend REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `query` turns panel form state into endpoint + parameter sets, `api` is the
//! fetch gateway that issues them, and `types` defines the response shapes
//! and the failure taxonomy.

pub mod api;
pub mod query;
pub mod types;
